//! # Tauri Commands Module
//!
//! All commands exposed to the frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── inventory.rs  ◄─── One command per form/table action
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend (dist/main.js)                                                │
//! │  ───────────────────────                                                │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const res = await invoke('add_item', {                                 │
//! │    name: 'Widget',                                                      │
//! │    quantity: '10'                                                       │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn add_item(                                                     │
//! │      inventory: State<'_, InventoryState>,  ◄── Injected by Tauri      │
//! │      name: String,                          ◄── From invoke params     │
//! │      quantity: String,                                                  │
//! │  ) -> Result<ScreenResponse, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { screen, notice }                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod inventory;
