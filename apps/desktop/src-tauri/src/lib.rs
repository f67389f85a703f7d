//! # Stock Desktop Library
//!
//! Core library for the Stock Management System desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! stock_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── db.rs         ◄─── Database handle (closed on exit)
//! │   ├── inventory.rs  ◄─── Form + table context behind a Mutex
//! │   └── config.rs     ◄─── AppConfig (env overrides)
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── inventory.rs  ◄─── Form/table actions
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::Path;
use tauri::{Manager, RunEvent};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{AppConfig, DbState, InventoryState};
use stock_core::Inventory;
use stock_db::{Database, DbConfig, DbError};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,stock=debug,sqlx=warn (RUST_LOG overrides)          │
/// │                                                                         │
/// │  2. Load AppConfig ───────────────────────────────────────────────────► │
/// │     • Platform data dir, or STOCK_DB_PATH                               │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • One SQLite connection, items table created if missing             │
/// │                                                                         │
/// │  4. Open Inventory ───────────────────────────────────────────────────► │
/// │     • Empty form in add mode, table loaded, total computed              │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Close the database on exit                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Stock Management System");

    let config = AppConfig::from_env();

    tauri::Builder::default()
        .setup(move |app| {
            ensure_parent_dir(&config.database_path)?;
            info!(db_path = ?config.database_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let (db, inventory) = tauri::async_runtime::block_on(async {
                let db = Database::new(DbConfig::new(&config.database_path)).await?;
                let inventory = Inventory::open(db.items()).await?;
                Ok::<_, DbError>((db, inventory))
            })?;

            info!(
                rows = inventory.view().rows().len(),
                total = inventory.view().total(),
                "Inventory loaded"
            );

            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&config.window_title)?;
            }

            app.manage(DbState::new(db));
            app.manage(InventoryState::new(inventory));
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Form and table commands
            commands::inventory::get_screen,
            commands::inventory::select_row,
            commands::inventory::add_item,
            commands::inventory::update_item,
            commands::inventory::edit_selected,
            commands::inventory::edit_row,
            commands::inventory::delete_selected,
            commands::inventory::cancel_edit,
            commands::inventory::clear_form,
            commands::inventory::search_items,
            commands::inventory::sort_column,
            // Config commands
            commands::config::get_config,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::Exit = event {
                match app.try_state::<DbState>() {
                    Some(db) => tauri::async_runtime::block_on(db.database().close()),
                    None => warn!("Exiting before the database was opened"),
                }
            }
        });
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stock=trace` - Show trace for stock crates only
/// - Default: INFO, DEBUG for stock crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stock=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Creates the directory holding the database file if it is missing.
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}
