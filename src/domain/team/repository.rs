//! Team repository trait

use async_trait::async_trait;
use uuid::Uuid;

use super::entity::{Team, TeamPatch, TeamReplacement};
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Get a team by id
    async fn get(&self, id: Uuid) -> Result<Option<Team>, DomainError>;

    /// List all teams, oldest first; empty table yields an empty Vec
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Replace every mutable field; `NotFound` when the id is absent
    async fn replace(
        &self,
        id: Uuid,
        replacement: TeamReplacement,
    ) -> Result<Team, DomainError>;

    /// Overwrite only the fields present in the patch
    async fn patch(&self, id: Uuid, patch: TeamPatch) -> Result<Team, DomainError>;

    /// Delete a team, cascading its memberships; returns false when
    /// the id is absent
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
