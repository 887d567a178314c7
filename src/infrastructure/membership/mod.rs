//! Membership repository implementations

mod in_memory_repository;
mod postgres_repository;

pub use in_memory_repository::InMemoryMembershipRepository;
pub use postgres_repository::PostgresMembershipRepository;
