//! Team CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::{Team, TeamPatch, TeamReplacement};

/// Request to create a team
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to replace a team; an omitted description clears it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to partially update a team
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Team response body
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            description: team.description().map(String::from),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let mut team =
        Team::new(request.name).map_err(|e| ApiError::validation(e.to_string()))?;

    if let Some(description) = request.description {
        team = team.with_description(description);
    }

    let team = state.teams.create(team).await.map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!("Listing teams");

    let teams = state.teams.list().await.map_err(ApiError::from)?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// GET /teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %id, "Getting team");

    let team = state
        .teams
        .get(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Team '{}' not found", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// PUT /teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %id, "Updating team");

    let replacement = TeamReplacement::new(request.name, request.description)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let team = state
        .teams
        .replace(id, replacement)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// PATCH /teams/{id}
pub async fn patch_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PatchTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(team_id = %id, "Patching team");

    let patch = TeamPatch::new(request.name, request.description)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let team = state.teams.patch(id, patch).await.map_err(ApiError::from)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// DELETE /teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    debug!(team_id = %id, "Deleting team");

    if !state.teams.delete(id).await.map_err(ApiError::from)? {
        return Err(ApiError::not_found(format!("Team '{}' not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
