//! Team entity, validation and repository contract

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamPatch, TeamReplacement};
pub use repository::TeamRepository;
pub use validation::{TeamValidationError, validate_team_name};
