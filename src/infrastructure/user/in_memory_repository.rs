//! In-memory user repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{User, UserPatch, UserReplacement, UserRepository};
use crate::infrastructure::memory::MemoryStore;

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.store.tables.write().await;

        if tables.users.values().any(|u| u.email() == user.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already in use",
                user.email()
            )));
        }

        tables.users.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let tables = self.store.tables.read().await;

        Ok(tables.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.store.tables.read().await;

        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at());

        Ok(users)
    }

    async fn replace(
        &self,
        id: Uuid,
        replacement: UserReplacement,
    ) -> Result<User, DomainError> {
        let mut tables = self.store.tables.write().await;

        if !tables.users.contains_key(&id) {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        if tables
            .users
            .values()
            .any(|u| u.id() != id && u.email() == replacement.email())
        {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already in use",
                replacement.email()
            )));
        }

        let user = tables
            .users
            .get_mut(&id)
            .expect("checked above");
        user.apply_replacement(&replacement);

        Ok(user.clone())
    }

    async fn patch(&self, id: Uuid, patch: UserPatch) -> Result<User, DomainError> {
        let mut tables = self.store.tables.write().await;

        if !tables.users.contains_key(&id) {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        if let Some(email) = patch.email() {
            if tables
                .users
                .values()
                .any(|u| u.id() != id && u.email() == email)
            {
                return Err(DomainError::conflict(format!(
                    "Email '{}' is already in use",
                    email
                )));
            }
        }

        let user = tables
            .users
            .get_mut(&id)
            .expect("checked above");
        user.apply_patch(&patch);

        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tables = self.store.tables.write().await;

        if tables.users.remove(&id).is_none() {
            return Ok(false);
        }

        // Same effect as the schema's ON DELETE CASCADE.
        tables.members.retain(|_, m| m.user_id() != id);

        Ok(true)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let tables = self.store.tables.read().await;

        Ok(tables.users.len())
    }
}
