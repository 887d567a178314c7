//! Membership validation

use thiserror::Error;

/// Errors that can occur during membership validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MembershipValidationError {
    #[error("Member role cannot be empty")]
    EmptyRole,
}

/// Validate a member role; whitespace-only counts as empty
pub fn validate_role(role: &str) -> Result<(), MembershipValidationError> {
    if role.trim().is_empty() {
        return Err(MembershipValidationError::EmptyRole);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_role() {
        assert!(validate_role("member").is_ok());
        assert!(validate_role("lead").is_ok());
    }

    #[test]
    fn test_empty_role() {
        assert_eq!(validate_role(""), Err(MembershipValidationError::EmptyRole));
        assert_eq!(
            validate_role("  "),
            Err(MembershipValidationError::EmptyRole)
        );
    }
}
