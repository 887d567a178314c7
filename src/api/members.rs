//! Team membership endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::membership::TeamMember;

/// Request to add a member to a team
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddTeamMemberRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub role: Option<String>,
}

/// Team member response body
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: String,
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id(),
            team_id: member.team_id(),
            user_id: member.user_id(),
            role: member.role().to_string(),
            joined_at: member.joined_at().to_rfc3339(),
        }
    }
}

/// POST /teams/{id}/members
pub async fn add_team_member(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<AddTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMemberResponse>), ApiError> {
    debug!(team_id = %team_id, user_id = %request.user_id, "Adding team member");

    let member = TeamMember::new(team_id, request.user_id, request.role)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    let member = state.members.add(member).await.map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(TeamMemberResponse::from(&member))))
}

/// GET /teams/{id}/members
pub async fn list_team_members(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamMemberResponse>>, ApiError> {
    debug!(team_id = %team_id, "Listing team members");

    let members = state
        .members
        .list_for_team(team_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(members.iter().map(TeamMemberResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::teams::{CreateTeamRequest, create_team};
    use crate::api::users::{CreateUserRequest, create_user, delete_user};
    use crate::infrastructure::membership::InMemoryMembershipRepository;
    use crate::infrastructure::memory::MemoryStore;
    use crate::infrastructure::team::InMemoryTeamRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn state() -> AppState {
        let store = Arc::new(MemoryStore::new());

        AppState {
            users: Arc::new(InMemoryUserRepository::new(store.clone())),
            teams: Arc::new(InMemoryTeamRepository::new(store.clone())),
            members: Arc::new(InMemoryMembershipRepository::new(store)),
        }
    }

    async fn seed(state: &AppState) -> (Uuid, Uuid) {
        let (_, Json(user)) = create_user(
            State(state.clone()),
            Json(CreateUserRequest {
                name: "Taro Yamada".to_string(),
                email: "taro@example.com".to_string(),
            }),
        )
        .await
        .unwrap();

        let (_, Json(team)) = create_team(
            State(state.clone()),
            Json(CreateTeamRequest {
                name: "Backend Team".to_string(),
                description: Some("Backend developers".to_string()),
            }),
        )
        .await
        .unwrap();

        (user.id, team.id)
    }

    #[test]
    fn test_add_request_rejects_unknown_fields() {
        let json = r#"{"user_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "admin": true}"#;
        assert!(serde_json::from_str::<AddTeamMemberRequest>(json).is_err());
    }

    #[test]
    fn test_add_request_role_defaults_to_none() {
        let json = r#"{"user_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}"#;
        let request: AddTeamMemberRequest = serde_json::from_str(json).unwrap();
        assert!(request.role.is_none());
    }

    #[tokio::test]
    async fn test_add_member_defaults_role() {
        let state = state();
        let (user_id, team_id) = seed(&state).await;

        let (status, Json(member)) = add_team_member(
            State(state),
            Path(team_id),
            Json(AddTeamMemberRequest {
                user_id,
                role: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(member.role, "member");
        assert_eq!(member.team_id, team_id);
        assert_eq!(member.user_id, user_id);
    }

    #[tokio::test]
    async fn test_add_member_to_missing_team_is_404() {
        let state = state();
        let (user_id, _) = seed(&state).await;

        let err = add_team_member(
            State(state),
            Path(Uuid::new_v4()),
            Json(AddTeamMemberRequest {
                user_id,
                role: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_missing_user_is_404() {
        let state = state();
        let (_, team_id) = seed(&state).await;

        let err = add_team_member(
            State(state),
            Path(team_id),
            Json(AddTeamMemberRequest {
                user_id: Uuid::new_v4(),
                role: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_membership_is_409() {
        let state = state();
        let (user_id, team_id) = seed(&state).await;

        add_team_member(
            State(state.clone()),
            Path(team_id),
            Json(AddTeamMemberRequest {
                user_id,
                role: None,
            }),
        )
        .await
        .unwrap();

        let err = add_team_member(
            State(state),
            Path(team_id),
            Json(AddTeamMemberRequest {
                user_id,
                role: Some("lead".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_list_members_of_empty_team() {
        let state = state();
        let (_, team_id) = seed(&state).await;

        let Json(members) = list_team_members(State(state), Path(team_id))
            .await
            .unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_member_lifecycle_with_user_deletion() {
        let state = state();
        let (user_id, team_id) = seed(&state).await;

        let (status, Json(member)) = add_team_member(
            State(state.clone()),
            Path(team_id),
            Json(AddTeamMemberRequest {
                user_id,
                role: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(member.role, "member");

        let status = delete_user(State(state.clone()), Path(user_id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let Json(members) = list_team_members(State(state), Path(team_id))
            .await
            .unwrap();
        assert!(members.is_empty());
    }
}
