//! Shared in-memory store backing the non-Postgres repositories

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Team, TeamMember, User};

/// All three tables live behind a single lock so cross-table work
/// (foreign-key checks, cascades, uniqueness scans) is atomic, matching
/// what a database transaction gives the Postgres repositories.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: HashMap<Uuid, User>,
    pub(crate) teams: HashMap<Uuid, Team>,
    pub(crate) members: HashMap<Uuid, TeamMember>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
