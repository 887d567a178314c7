//! User validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User name cannot be empty")]
    EmptyName,

    #[error("Email must have the shape local@domain with non-empty parts")]
    InvalidEmail,
}

/// Validate a user name; whitespace-only counts as empty
pub fn validate_user_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate an email address with a minimal shape check: exactly one `@`
/// separating a non-empty local part from a non-empty domain. Comparison
/// elsewhere is case-sensitive; nothing is normalized here.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(UserValidationError::InvalidEmail),
    }
}
