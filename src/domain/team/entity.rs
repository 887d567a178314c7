//! Team entity and its write payloads

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{TeamValidationError, validate_team_name};

/// Team entity
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Team {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with a fresh id
    pub fn new(name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Full replace: `description` is overwritten wholesale, so a
    /// replacement without one clears it
    pub fn apply_replacement(&mut self, replacement: &TeamReplacement) {
        self.name = replacement.name().to_string();
        self.description = replacement.description().map(String::from);
        self.touch();
    }

    /// Partial update: only fields present in the patch are overwritten
    pub fn apply_patch(&mut self, patch: &TeamPatch) {
        if patch.is_empty() {
            return;
        }

        if let Some(name) = patch.name() {
            self.name = name.to_string();
        }

        if let Some(description) = patch.description() {
            self.description = Some(description.to_string());
        }

        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Validated payload for a full-replace update
#[derive(Debug, Clone)]
pub struct TeamReplacement {
    name: String,
    description: Option<String>,
}

impl TeamReplacement {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated payload for a partial update
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    name: Option<String>,
    description: Option<String>,
}

impl TeamPatch {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, TeamValidationError> {
        if let Some(ref name) = name {
            validate_team_name(name)?;
        }

        Ok(Self { name, description })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_creation() {
        let team = Team::new("Backend Team").unwrap();

        assert_eq!(team.name(), "Backend Team");
        assert!(team.description().is_none());
        assert_eq!(team.created_at(), team.updated_at());
    }

    #[test]
    fn test_team_with_description() {
        let team = Team::new("Backend Team")
            .unwrap()
            .with_description("Backend developers");

        assert_eq!(team.description(), Some("Backend developers"));
    }

    #[test]
    fn test_team_invalid_name() {
        assert!(Team::new("").is_err());
        assert!(Team::new("  ").is_err());
    }

    #[test]
    fn test_replacement_clears_missing_description() {
        let mut team = Team::new("Backend Team")
            .unwrap()
            .with_description("Backend developers");

        let replacement = TeamReplacement::new("Platform Team", None).unwrap();
        team.apply_replacement(&replacement);

        assert_eq!(team.name(), "Platform Team");
        assert!(team.description().is_none());
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut team = Team::new("Backend Team")
            .unwrap()
            .with_description("Backend developers");

        let patch = TeamPatch::new(Some("Core Team".to_string()), None).unwrap();
        team.apply_patch(&patch);

        assert_eq!(team.name(), "Core Team");
        assert_eq!(team.description(), Some("Backend developers"));
    }

    #[test]
    fn test_patch_updates_timestamp() {
        let mut team = Team::new("Backend Team").unwrap();
        let updated = team.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));
        let patch = TeamPatch::new(None, Some("New description".to_string())).unwrap();
        team.apply_patch(&patch);

        assert_eq!(team.description(), Some("New description"));
        assert!(team.updated_at() > updated);
    }

    #[test]
    fn test_patch_rejects_empty_name() {
        assert!(TeamPatch::new(Some(String::new()), None).is_err());
    }
}
