//! User entity and its write payloads

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{UserValidationError, validate_email, validate_user_name};

/// User entity. The id and both timestamps are assigned at construction;
/// the id never changes afterwards.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    id: Uuid,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();
        validate_user_name(&name)?;
        validate_email(&email)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Full replace: every mutable field is overwritten
    pub fn apply_replacement(&mut self, replacement: &UserReplacement) {
        self.name = replacement.name().to_string();
        self.email = replacement.email().to_string();
        self.touch();
    }

    /// Partial update: only fields present in the patch are overwritten,
    /// absent fields keep their prior values
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if patch.is_empty() {
            return;
        }

        if let Some(name) = patch.name() {
            self.name = name.to_string();
        }

        if let Some(email) = patch.email() {
            self.email = email.to_string();
        }

        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Validated payload for a full-replace update. Both fields are required;
/// a missing field is a deserialization error upstream, never an implicit
/// null here.
#[derive(Debug, Clone)]
pub struct UserReplacement {
    name: String,
    email: String,
}

impl UserReplacement {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let email = email.into();
        validate_user_name(&name)?;
        validate_email(&email)?;

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Validated payload for a partial update; present fields are validated
/// with the same rules as creation
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    name: Option<String>,
    email: Option<String>,
}

impl UserPatch {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationError> {
        if let Some(ref name) = name {
            validate_user_name(name)?;
        }

        if let Some(ref email) = email {
            validate_email(email)?;
        }

        Ok(Self { name, email })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Taro Yamada", "taro@example.com").unwrap();

        assert_eq!(user.name(), "Taro Yamada");
        assert_eq!(user.email(), "taro@example.com");
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_user_ids_are_unique() {
        let a = User::new("A", "a@example.com").unwrap();
        let b = User::new("B", "b@example.com").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_user_invalid_name() {
        assert!(User::new("", "taro@example.com").is_err());
        assert!(User::new("   ", "taro@example.com").is_err());
    }

    #[test]
    fn test_user_invalid_email() {
        assert!(User::new("Taro", "not-an-email").is_err());
    }

    #[test]
    fn test_apply_replacement() {
        let mut user = User::new("Taro", "taro@example.com").unwrap();
        let id = user.id();
        let created = user.created_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        let replacement =
            UserReplacement::new("Hanako", "hanako@example.com").unwrap();
        user.apply_replacement(&replacement);

        assert_eq!(user.id(), id);
        assert_eq!(user.name(), "Hanako");
        assert_eq!(user.email(), "hanako@example.com");
        assert_eq!(user.created_at(), created);
        assert!(user.updated_at() > created);
    }

    #[test]
    fn test_apply_patch_only_changes_present_fields() {
        let mut user = User::new("Taro", "taro@example.com").unwrap();

        let patch = UserPatch::new(Some("Jiro".to_string()), None).unwrap();
        user.apply_patch(&patch);

        assert_eq!(user.name(), "Jiro");
        assert_eq!(user.email(), "taro@example.com");
    }

    #[test]
    fn test_apply_empty_patch_is_a_no_op() {
        let mut user = User::new("Taro", "taro@example.com").unwrap();
        let updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));
        user.apply_patch(&UserPatch::default());

        assert_eq!(user.name(), "Taro");
        assert_eq!(user.updated_at(), updated);
    }

    #[test]
    fn test_patch_refreshes_updated_at() {
        let mut user = User::new("Taro", "taro@example.com").unwrap();
        let updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));
        let patch = UserPatch::new(None, Some("jiro@example.com".to_string())).unwrap();
        user.apply_patch(&patch);

        assert!(user.updated_at() > updated);
    }

    #[test]
    fn test_patch_validates_present_fields() {
        assert!(UserPatch::new(Some("  ".to_string()), None).is_err());
        assert!(UserPatch::new(None, Some("bad".to_string())).is_err());
        assert!(UserPatch::new(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_replacement_requires_valid_fields() {
        assert!(UserReplacement::new("", "taro@example.com").is_err());
        assert!(UserReplacement::new("Taro", "").is_err());
    }
}
