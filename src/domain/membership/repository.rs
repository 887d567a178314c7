//! Membership repository trait

use async_trait::async_trait;
use uuid::Uuid;

use super::entity::TeamMember;
use crate::domain::DomainError;

/// Repository for managing team memberships
#[async_trait]
pub trait MembershipRepository: Send + Sync + std::fmt::Debug {
    /// Insert a membership. Fails with `NotFound` when the referenced
    /// team or user does not exist and with `Conflict` when the
    /// (team, user) pair is already present.
    async fn add(&self, member: TeamMember) -> Result<TeamMember, DomainError>;

    /// List the memberships of a team, oldest first. An unknown team id
    /// yields an empty Vec.
    async fn list_for_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DomainError>;
}
