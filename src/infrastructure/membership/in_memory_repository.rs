//! In-memory membership repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::membership::{MembershipRepository, TeamMember};
use crate::infrastructure::memory::MemoryStore;

/// In-memory implementation of MembershipRepository
#[derive(Debug, Clone)]
pub struct InMemoryMembershipRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryMembershipRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn add(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        let mut tables = self.store.tables.write().await;

        if !tables.teams.contains_key(&member.team_id()) {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                member.team_id()
            )));
        }

        if !tables.users.contains_key(&member.user_id()) {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                member.user_id()
            )));
        }

        if tables
            .members
            .values()
            .any(|m| m.team_id() == member.team_id() && m.user_id() == member.user_id())
        {
            return Err(DomainError::conflict(format!(
                "User '{}' is already a member of team '{}'",
                member.user_id(),
                member.team_id()
            )));
        }

        tables.members.insert(member.id(), member.clone());

        Ok(member)
    }

    async fn list_for_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DomainError> {
        let tables = self.store.tables.read().await;

        let mut members: Vec<TeamMember> = tables
            .members
            .values()
            .filter(|m| m.team_id() == team_id)
            .cloned()
            .collect();
        members.sort_by_key(|m| m.joined_at());

        Ok(members)
    }
}
