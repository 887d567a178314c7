//! User repository trait

use async_trait::async_trait;
use uuid::Uuid;

use super::entity::{User, UserPatch, UserReplacement};
use crate::domain::DomainError;

/// Repository for managing users
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new user; fails with `Conflict` when the email is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by id
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// List all users, oldest first; empty table yields an empty Vec
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Replace every mutable field; `NotFound` when the id is absent,
    /// `Conflict` when the new email belongs to another user
    async fn replace(
        &self,
        id: Uuid,
        replacement: UserReplacement,
    ) -> Result<User, DomainError>;

    /// Overwrite only the fields present in the patch; same error
    /// contract as `replace`
    async fn patch(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError>;

    /// Delete a user, cascading their team memberships; returns false
    /// when the id is absent
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count all users
    async fn count(&self) -> Result<usize, DomainError>;
}
