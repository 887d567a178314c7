//! User entity, validation and repository contract

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserPatch, UserReplacement};
pub use repository::UserRepository;
pub use validation::{UserValidationError, validate_email, validate_user_name};
