//! # Inventory Commands
//!
//! One Tauri command per user action on the form or the table.
//!
//! Every command answers with the full screen plus an optional notice, so
//! the frontend only ever re-renders from what it gets back.
//!
//! ## Action Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Widget                     Command              Dispatched as           │
//! │  ──────                     ───────              ─────────────           │
//! │  (startup)                  get_screen           (read only)             │
//! │  Row click                  select_row           Command::Select         │
//! │  Add button                 add_item             Command::Add            │
//! │  Update button              update_item          Command::Update         │
//! │  Edit Selected button       edit_selected        Command::EditSelected   │
//! │  Row double-click           edit_row             Command::EditRow        │
//! │  Delete Selected button     delete_selected      Command::DeleteSelected │
//! │  Escape in form             cancel_edit          Command::CancelEdit     │
//! │  Clear button               clear_form           Command::Clear          │
//! │  Search Go button           search_items         Command::Search         │
//! │  Column heading click       sort_column          Command::Sort           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::InventoryState;
use stock_core::{Column, Command, Notice, Outcome, Screen};

/// What every inventory command returns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenResponse {
    pub screen: Screen,

    /// Shown modally by the frontend when present.
    pub notice: Option<Notice>,
}

impl From<(Outcome, Screen)> for ScreenResponse {
    fn from((outcome, screen): (Outcome, Screen)) -> Self {
        ScreenResponse {
            screen,
            notice: outcome.notice,
        }
    }
}

async fn run(inventory: &InventoryState, command: Command) -> Result<ScreenResponse, ApiError> {
    Ok(inventory.dispatch(command).await?.into())
}

/// Gets the current screen.
#[tauri::command]
pub async fn get_screen(inventory: State<'_, InventoryState>) -> Result<ScreenResponse, ApiError> {
    debug!("get_screen command");
    Ok(ScreenResponse {
        screen: inventory.screen().await,
        notice: None,
    })
}

/// Selects a row, or clears the selection with `null`.
#[tauri::command]
pub async fn select_row(
    inventory: State<'_, InventoryState>,
    id: Option<i64>,
) -> Result<ScreenResponse, ApiError> {
    debug!(?id, "select_row command");
    run(&inventory, Command::Select { id }).await
}

/// Inserts a new item from the raw form fields.
#[tauri::command]
pub async fn add_item(
    inventory: State<'_, InventoryState>,
    name: String,
    quantity: String,
) -> Result<ScreenResponse, ApiError> {
    debug!(name = %name, quantity = %quantity, "add_item command");
    run(&inventory, Command::Add { name, quantity }).await
}

/// Writes the form fields back to the item being edited.
#[tauri::command]
pub async fn update_item(
    inventory: State<'_, InventoryState>,
    name: String,
    quantity: String,
) -> Result<ScreenResponse, ApiError> {
    debug!(name = %name, quantity = %quantity, "update_item command");
    run(&inventory, Command::Update { name, quantity }).await
}

/// Loads the selected row into the form.
#[tauri::command]
pub async fn edit_selected(
    inventory: State<'_, InventoryState>,
) -> Result<ScreenResponse, ApiError> {
    debug!("edit_selected command");
    run(&inventory, Command::EditSelected).await
}

/// Selects and loads a row in one step (double-click).
#[tauri::command]
pub async fn edit_row(
    inventory: State<'_, InventoryState>,
    id: i64,
) -> Result<ScreenResponse, ApiError> {
    debug!(id, "edit_row command");
    run(&inventory, Command::EditRow { id }).await
}

/// Deletes the selected row.
#[tauri::command]
pub async fn delete_selected(
    inventory: State<'_, InventoryState>,
) -> Result<ScreenResponse, ApiError> {
    debug!("delete_selected command");
    run(&inventory, Command::DeleteSelected).await
}

/// Leaves edit mode and clears the form.
#[tauri::command]
pub async fn cancel_edit(inventory: State<'_, InventoryState>) -> Result<ScreenResponse, ApiError> {
    debug!("cancel_edit command");
    run(&inventory, Command::CancelEdit).await
}

/// Clears the form fields.
#[tauri::command]
pub async fn clear_form(inventory: State<'_, InventoryState>) -> Result<ScreenResponse, ApiError> {
    debug!("clear_form command");
    run(&inventory, Command::Clear).await
}

/// Filters the table by name. Empty text shows every row.
#[tauri::command]
pub async fn search_items(
    inventory: State<'_, InventoryState>,
    text: String,
) -> Result<ScreenResponse, ApiError> {
    debug!(text = %text, "search_items command");
    run(&inventory, Command::Search { text }).await
}

/// Sorts the displayed rows by `column`, flipping direction on repeat.
#[tauri::command]
pub async fn sort_column(
    inventory: State<'_, InventoryState>,
    column: Column,
) -> Result<ScreenResponse, ApiError> {
    debug!(?column, "sort_column command");
    run(&inventory, Command::Sort { column }).await
}
