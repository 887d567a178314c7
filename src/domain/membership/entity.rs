//! Team membership entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{MembershipValidationError, validate_role};

/// Role assigned when a member is added without one
pub const DEFAULT_ROLE: &str = "member";

/// A user's membership in a team. The row is owned by the team-user
/// relationship: deleting either side removes it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamMember {
    id: Uuid,
    team_id: Uuid,
    user_id: Uuid,
    role: String,
    joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new membership; a missing role falls back to
    /// [`DEFAULT_ROLE`]
    pub fn new(
        team_id: Uuid,
        user_id: Uuid,
        role: Option<String>,
    ) -> Result<Self, MembershipValidationError> {
        let role = role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
        validate_role(&role)?;

        Ok(Self {
            id: Uuid::new_v4(),
            team_id,
            user_id,
            role,
            joined_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role() {
        let member = TeamMember::new(Uuid::new_v4(), Uuid::new_v4(), None).unwrap();
        assert_eq!(member.role(), "member");
    }

    #[test]
    fn test_explicit_role() {
        let member =
            TeamMember::new(Uuid::new_v4(), Uuid::new_v4(), Some("lead".to_string()))
                .unwrap();
        assert_eq!(member.role(), "lead");
    }

    #[test]
    fn test_empty_role_rejected() {
        let result =
            TeamMember::new(Uuid::new_v4(), Uuid::new_v4(), Some("  ".to_string()));
        assert!(result.is_err());
    }
}
