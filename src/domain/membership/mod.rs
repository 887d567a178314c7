//! Team membership entity, validation and repository contract

mod entity;
mod repository;
mod validation;

pub use entity::{DEFAULT_ROLE, TeamMember};
pub use repository::MembershipRepository;
pub use validation::{MembershipValidationError, validate_role};
