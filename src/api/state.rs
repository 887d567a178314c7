//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::{MembershipRepository, TeamRepository, UserRepository};

/// Repository handles injected into handlers through axum state. Each
/// handler borrows them for the lifetime of one request; the backing
/// connections are scoped per operation by the repositories themselves.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MembershipRepository>,
}
