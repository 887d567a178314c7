use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::health;
use super::members;
use super::state::AppState;
use super::teams;
use super::users;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/{id}",
            get(teams::get_team)
                .put(teams::update_team)
                .patch(teams::patch_team)
                .delete(teams::delete_team),
        )
        .route(
            "/teams/{id}/members",
            get(members::list_team_members).post(members::add_team_member),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
