//! Domain model: entities, validation rules and repository contracts

pub mod error;
pub mod membership;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use membership::{MembershipRepository, TeamMember};
pub use team::{Team, TeamPatch, TeamReplacement, TeamRepository};
pub use user::{User, UserPatch, UserReplacement, UserRepository};
