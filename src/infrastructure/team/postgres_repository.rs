//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::team::{Team, TeamPatch, TeamReplacement, TeamRepository};

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.description())
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        Ok(team)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Team>, DomainError> {
        sqlx::query_as::<_, Team>(
            "SELECT id, name, description, created_at, updated_at FROM teams WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        sqlx::query_as::<_, Team>(
            "SELECT id, name, description, created_at, updated_at FROM teams ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))
    }

    async fn replace(
        &self,
        id: Uuid,
        replacement: TeamReplacement,
    ) -> Result<Team, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let mut team = sqlx::query_as::<_, Team>(
            "SELECT id, name, description, created_at, updated_at FROM teams WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load team: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        team.apply_replacement(&replacement);

        sqlx::query(
            "UPDATE teams SET name = $2, description = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.description())
        .bind(team.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(team)
    }

    async fn patch(&self, id: Uuid, patch: TeamPatch) -> Result<Team, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let mut team = sqlx::query_as::<_, Team>(
            "SELECT id, name, description, created_at, updated_at FROM teams WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load team: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        team.apply_patch(&patch);

        sqlx::query(
            "UPDATE teams SET name = $2, description = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.description())
        .bind(team.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to patch team: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(team)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // Memberships go with the team via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
