//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{User, UserPatch, UserReplacement, UserRepository};
use crate::infrastructure::storage::translate_constraint;

/// PostgreSQL implementation of UserRepository. Every check-then-write
/// path runs inside one transaction; the schema's UNIQUE constraint
/// remains the authoritative guard behind the fast-path checks.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn email_taken_by_other(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    exclude: Option<Uuid>,
) -> Result<bool, DomainError> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(email)
    .bind(exclude)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| DomainError::storage(format!("Failed to check email uniqueness: {}", e)))
}

fn email_conflict(email: &str) -> DomainError {
    DomainError::conflict(format!("Email '{}' is already in use", email))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        if email_taken_by_other(&mut tx, user.email(), None).await? {
            return Err(email_conflict(user.email()));
        }

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            translate_constraint(
                e,
                format!("Email '{}' is already in use", user.email()),
                "Referenced row not found",
                "Failed to create user",
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(user)
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))
    }

    async fn replace(
        &self,
        id: Uuid,
        replacement: UserReplacement,
    ) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let mut user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load user: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if replacement.email() != user.email()
            && email_taken_by_other(&mut tx, replacement.email(), Some(id)).await?
        {
            return Err(email_conflict(replacement.email()));
        }

        user.apply_replacement(&replacement);

        sqlx::query("UPDATE users SET name = $2, email = $3, updated_at = $4 WHERE id = $1")
            .bind(user.id())
            .bind(user.name())
            .bind(user.email())
            .bind(user.updated_at())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                translate_constraint(
                    e,
                    format!("Email '{}' is already in use", user.email()),
                    "Referenced row not found",
                    "Failed to update user",
                )
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(user)
    }

    async fn patch(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let mut user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load user: {}", e)))?
        .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(email) = patch.email() {
            if email != user.email()
                && email_taken_by_other(&mut tx, email, Some(id)).await?
            {
                return Err(email_conflict(email));
            }
        }

        user.apply_patch(&patch);

        sqlx::query("UPDATE users SET name = $2, email = $3, updated_at = $4 WHERE id = $1")
            .bind(user.id())
            .bind(user.name())
            .bind(user.email())
            .bind(user.updated_at())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                translate_constraint(
                    e,
                    format!("Email '{}' is already in use", user.email()),
                    "Referenced row not found",
                    "Failed to patch user",
                )
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // Memberships go with the user via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count as usize)
    }
}
