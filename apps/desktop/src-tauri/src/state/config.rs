//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default window title.
pub const DEFAULT_WINDOW_TITLE: &str = "Stock Management System";

/// File name of the database inside the data directory.
const DATABASE_FILE: &str = "stock.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// SQLite file backing the items table.
    ///
    /// ## Platform Defaults
    /// - **macOS**: `~/Library/Application Support/com.stock.tracker/stock.db`
    /// - **Windows**: `%APPDATA%\stock\tracker\data\stock.db`
    /// - **Linux**: `~/.local/share/tracker/stock.db`
    pub database_path: PathBuf,

    /// Main window title.
    pub window_title: String,
}

impl Default for AppConfig {
    /// Falls back to `./stock.db` when no home directory can be resolved.
    fn default() -> Self {
        let database_path = ProjectDirs::from("com", "stock", "tracker")
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE));

        AppConfig {
            database_path,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCK_DB_PATH`: Override the database file
    /// - `STOCK_WINDOW_TITLE`: Override the window title
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("STOCK_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(title) = lookup("STOCK_WINDOW_TITLE").filter(|t| !t.trim().is_empty()) {
            config.window_title = title;
        }

        config
    }
}
