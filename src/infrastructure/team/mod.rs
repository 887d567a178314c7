//! Team repository implementations

mod in_memory_repository;
mod postgres_repository;

pub use in_memory_repository::InMemoryTeamRepository;
pub use postgres_repository::PostgresTeamRepository;
