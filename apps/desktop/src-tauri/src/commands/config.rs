//! # Config Commands
//!
//! Tauri commands for retrieving application configuration.

use tauri::State;
use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration.
///
/// ## Returns
/// Complete configuration state (read-only)
#[tauri::command]
pub fn get_config(config: State<'_, AppConfig>) -> AppConfig {
    debug!("get_config command");
    (*config).clone()
}
