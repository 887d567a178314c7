//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

use super::state::AppState;
use crate::api::types::Json;

/// Health response body
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Unavailable,
}

/// GET /health - probes the storage backend instead of reporting healthy
/// unconditionally; an unreachable database surfaces as 503
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.users.count().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: HealthStatus::Ok,
            }),
        ),
        Err(e) => {
            error!(error = %e, "Health check failed");

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: HealthStatus::Unavailable,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
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

    #[test]
    fn test_health_response_serialization() {
        let body = HealthResponse {
            status: HealthStatus::Ok,
        };

        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_unavailable_serialization() {
        let body = HealthResponse {
            status: HealthStatus::Unavailable,
        };

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"unavailable"}"#
        );
    }

    #[tokio::test]
    async fn test_health_check_ok() {
        let response = health_check(State(state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
