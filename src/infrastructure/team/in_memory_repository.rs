//! In-memory team repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::team::{Team, TeamPatch, TeamReplacement, TeamRepository};
use crate::infrastructure::memory::MemoryStore;

/// In-memory implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryTeamRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let mut tables = self.store.tables.write().await;
        tables.teams.insert(team.id(), team.clone());

        Ok(team)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Team>, DomainError> {
        let tables = self.store.tables.read().await;

        Ok(tables.teams.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let tables = self.store.tables.read().await;

        let mut teams: Vec<Team> = tables.teams.values().cloned().collect();
        teams.sort_by_key(|t| t.created_at());

        Ok(teams)
    }

    async fn replace(
        &self,
        id: Uuid,
        replacement: TeamReplacement,
    ) -> Result<Team, DomainError> {
        let mut tables = self.store.tables.write().await;

        let team = tables
            .teams
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;
        team.apply_replacement(&replacement);

        Ok(team.clone())
    }

    async fn patch(&self, id: Uuid, patch: TeamPatch) -> Result<Team, DomainError> {
        let mut tables = self.store.tables.write().await;

        let team = tables
            .teams
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;
        team.apply_patch(&patch);

        Ok(team.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tables = self.store.tables.write().await;

        if tables.teams.remove(&id).is_none() {
            return Ok(false);
        }

        // Same effect as the schema's ON DELETE CASCADE.
        tables.members.retain(|_, m| m.team_id() != id);

        Ok(true)
    }
}
