//! PostgreSQL membership repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::membership::{MembershipRepository, TeamMember};
use crate::infrastructure::storage::translate_constraint;

/// PostgreSQL implementation of MembershipRepository. Existence and
/// duplicate checks run in the insert transaction; the FK and UNIQUE
/// constraints catch whatever races past them.
#[derive(Debug, Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn add(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let team_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)")
                .bind(member.team_id())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to check team: {}", e)))?;

        if !team_exists {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                member.team_id()
            )));
        }

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(member.user_id())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to check user: {}", e)))?;

        if !user_exists {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                member.user_id()
            )));
        }

        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM team_members WHERE team_id = $1 AND user_id = $2)",
        )
        .bind(member.team_id())
        .bind(member.user_id())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check membership: {}", e)))?;

        if duplicate {
            return Err(DomainError::conflict(format!(
                "User '{}' is already a member of team '{}'",
                member.user_id(),
                member.team_id()
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO team_members (id, team_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(member.id())
        .bind(member.team_id())
        .bind(member.user_id())
        .bind(member.role())
        .bind(member.joined_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            translate_constraint(
                e,
                format!(
                    "User '{}' is already a member of team '{}'",
                    member.user_id(),
                    member.team_id()
                ),
                "Team or user not found",
                "Failed to add team member",
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(member)
    }

    async fn list_for_team(&self, team_id: Uuid) -> Result<Vec<TeamMember>, DomainError> {
        sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT id, team_id, user_id, role, joined_at
            FROM team_members
            WHERE team_id = $1
            ORDER BY joined_at
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list team members: {}", e)))
    }
}
