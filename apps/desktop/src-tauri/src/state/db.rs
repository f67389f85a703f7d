//! # Database State
//!
//! Wraps the `Database` handle so the exit hook can close it.
//!
//! Commands never touch this directly: every read and write goes through
//! the inventory, which owns its own `ItemRepository` over the same
//! connection.

use stock_db::Database;

/// Wrapper around `Database` for Tauri state management.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the wrapped Database.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
