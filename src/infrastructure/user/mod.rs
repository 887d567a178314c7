//! User repository implementations

mod in_memory_repository;
mod postgres_repository;

pub use in_memory_repository::InMemoryUserRepository;
pub use postgres_repository::PostgresUserRepository;
