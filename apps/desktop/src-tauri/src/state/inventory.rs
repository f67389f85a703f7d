//! # Inventory State
//!
//! The form and table context shared by every command.
//!
//! ## Thread Safety
//! The inventory is wrapped in a `tokio::sync::Mutex` because:
//! 1. Every command mutates the form or the table
//! 2. A command holds the lock across store awaits
//! 3. Tauri commands can run concurrently
//!
//! Holding the lock for the whole command totally orders user actions.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory State Operations                           │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Command               │
//! │  ───────────────          ─────────────           ───────               │
//! │                                                                         │
//! │  Click Add ──────────────► add_item() ──────────► Command::Add          │
//! │  Double-click row ───────► edit_row() ──────────► Command::EditRow      │
//! │  Click heading ──────────► sort_column() ───────► Command::Sort         │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                    lock ─► dispatch ─► screen() ─► unlock               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::Mutex;
use tracing::debug;

use stock_core::{Command, Inventory, Outcome, Screen};
use stock_db::{DbError, ItemRepository};

/// Wrapper around the `Inventory` for Tauri state management.
pub struct InventoryState {
    inventory: Mutex<Inventory<ItemRepository>>,
}

impl InventoryState {
    /// Creates a new InventoryState around an opened inventory.
    pub fn new(inventory: Inventory<ItemRepository>) -> Self {
        InventoryState {
            inventory: Mutex::new(inventory),
        }
    }

    /// Dispatches `command` and captures the screen it leaves behind.
    pub async fn dispatch(&self, command: Command) -> Result<(Outcome, Screen), DbError> {
        let mut inventory = self.inventory.lock().await;
        let outcome = inventory.dispatch(command).await?;
        Ok((outcome, inventory.screen()))
    }

    /// Current screen without changing anything.
    pub async fn screen(&self) -> Screen {
        let inventory = self.inventory.lock().await;
        debug!(rows = inventory.view().rows().len(), "Capturing screen");
        inventory.screen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_core::{Column, FormMode, NoticeKind};
    use stock_db::{Database, DbConfig};

    async fn state() -> (Database, InventoryState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let inventory = Inventory::open(db.items()).await.unwrap();
        (db, InventoryState::new(inventory))
    }

    fn add(name: &str, quantity: &str) -> Command {
        Command::Add {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_updated_screen() {
        let (_db, state) = state().await;

        let (outcome, screen) = state.dispatch(add("Widget", "10")).await.unwrap();

        assert_eq!(outcome.notice.map(|n| n.kind), Some(NoticeKind::Info));
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.footer, "Total Stock: 10");
        assert_eq!(screen.form.name, "");
    }

    #[tokio::test]
    async fn test_double_click_loads_form() {
        let (_db, state) = state().await;
        let (_, screen) = state.dispatch(add("Widget", "10")).await.unwrap();
        let id = screen.rows[0].id;

        let (outcome, screen) = state.dispatch(Command::EditRow { id }).await.unwrap();

        assert!(outcome.notice.is_none());
        assert_eq!(screen.form.mode, FormMode::Edit { target: id });
        assert!(screen.form.update_enabled);
        assert!(!screen.form.add_enabled);
        assert_eq!(screen.selected, Some(id));
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_serialized() {
        let (db, state) = state().await;
        let state = std::sync::Arc::new(state);

        let mut handles = Vec::new();
        for n in 0..8 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                state.dispatch(add(&format!("Item {n}"), "1")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(db.items().count().await.unwrap(), 8);
        assert_eq!(state.screen().await.total, 8);
    }

    #[tokio::test]
    async fn test_sort_is_reflected_in_screen() {
        let (_db, state) = state().await;
        for (name, quantity) in [("a", "10"), ("b", "2"), ("c", "33")] {
            state.dispatch(add(name, quantity)).await.unwrap();
        }

        let (_, screen) = state
            .dispatch(Command::Sort {
                column: Column::Quantity,
            })
            .await
            .unwrap();

        let quantities: Vec<i64> = screen.rows.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2, 10, 33]);
        assert!(screen.sort.is_some());
    }

    #[tokio::test]
    async fn test_store_fault_surfaces_as_error() {
        let (db, state) = state().await;
        db.close().await;

        assert!(state.dispatch(Command::Refresh).await.is_err());
    }
}
