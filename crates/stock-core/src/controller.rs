//! # Command Dispatch
//!
//! [`Inventory`] is the application context: it owns the store handle, the
//! form and the view model, and every user action reaches it as a
//! [`Command`]. All form transitions live in [`Inventory::dispatch`].
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dispatch Flow                                    │
//! │                                                                         │
//! │  Command::Add { name, quantity }                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Form rules ─── invalid? ───► Outcome { notice: Error(..) }            │
//! │       │                       (table and mode untouched)               │
//! │       ▼                                                                 │
//! │  ItemStore::insert ─── fault? ───► Err(S::Error)  (propagates as-is)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh: list_all / search + total_quantity                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Outcome { notice: Info("Item added successfully!") }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected actions never touch the store. Store faults are not turned into
//! notices; the caller decides what a fault means.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::form::FormState;
use crate::types::{Column, Item};
use crate::validation::{validate_item_input, validate_search_query};
use crate::view::{Screen, ViewModel};

// =============================================================================
// Store Seam
// =============================================================================

/// The record repository as seen by the dispatcher.
///
/// Implementations trust their caller: names arrive trimmed and non-empty,
/// quantities arrive non-negative. `update` and `delete` of a missing id
/// succeed silently.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Store fault type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Appends a row and returns the id the store assigned.
    async fn insert(&self, name: &str, quantity: i64) -> Result<i64, Self::Error>;

    /// All rows in store order.
    async fn list_all(&self) -> Result<Vec<Item>, Self::Error>;

    /// Rows whose name contains `text`, case-insensitively.
    async fn search(&self, text: &str) -> Result<Vec<Item>, Self::Error>;

    /// Overwrites name and quantity of row `id`.
    async fn update(&self, id: i64, name: &str, quantity: i64) -> Result<(), Self::Error>;

    /// Removes row `id`.
    async fn delete(&self, id: i64) -> Result<(), Self::Error>;

    /// Sum of all quantities, 0 for an empty table.
    async fn total_quantity(&self) -> Result<i64, Self::Error>;
}

// =============================================================================
// Commands and Outcomes
// =============================================================================

/// A user action sent from the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Re-query the store with the current search text.
    Refresh,
    /// Select a displayed row (`None` clears the selection).
    Select { id: Option<i64> },
    /// Submit the form in add mode.
    Add { name: String, quantity: String },
    /// Submit the form in edit mode.
    Update { name: String, quantity: String },
    /// Load the selected row into the form.
    EditSelected,
    /// Select a row and load it into the form (double-click).
    EditRow { id: i64 },
    /// Delete the selected row.
    DeleteSelected,
    /// Leave edit mode and empty the form.
    CancelEdit,
    /// Empty the form fields.
    Clear,
    /// Set the search text and refresh.
    Search { text: String },
    /// Sort the displayed rows by a column.
    Sort { column: Column },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Result of a dispatched command that did not hit a store fault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
}

/// Why a command stopped early.
enum Failure<E> {
    Rejected(CoreError),
    Store(E),
}

impl<E> From<CoreError> for Failure<E> {
    fn from(err: CoreError) -> Self {
        Failure::Rejected(err)
    }
}

impl<E> From<ValidationError> for Failure<E> {
    fn from(err: ValidationError) -> Self {
        Failure::Rejected(err.into())
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Application context: store handle, form and view model.
#[derive(Debug)]
pub struct Inventory<S> {
    store: S,
    form: FormState,
    view: ViewModel,
}

impl<S: ItemStore> Inventory<S> {
    /// Wraps `store` with an empty form and an empty, unrefreshed view.
    pub fn new(store: S) -> Self {
        Inventory {
            store,
            form: FormState::new(),
            view: ViewModel::new(),
        }
    }

    /// Wraps `store` and loads the initial table.
    pub async fn open(store: S) -> Result<Self, S::Error> {
        let mut inventory = Inventory::new(store);
        inventory.refresh().await?;
        Ok(inventory)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Snapshot for rendering.
    pub fn screen(&self) -> Screen {
        Screen::capture(&self.form, &self.view)
    }

    /// Applies one user action.
    ///
    /// Rejected actions come back as an error notice inside `Ok`; only store
    /// faults produce `Err`.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, S::Error> {
        debug!(?command, mode = ?self.form.mode(), "Dispatching command");

        match self.apply(command).await {
            Ok(notice) => Ok(Outcome { notice }),
            Err(Failure::Rejected(err)) => {
                debug!(error = %err, "Command rejected");
                Ok(Outcome {
                    notice: Some(Notice::error(err.to_string())),
                })
            }
            Err(Failure::Store(err)) => {
                warn!(error = %err, "Store fault during command");
                Err(err)
            }
        }
    }

    async fn apply(&mut self, command: Command) -> Result<Option<Notice>, Failure<S::Error>> {
        match command {
            Command::Refresh => {
                self.refresh().await.map_err(Failure::Store)?;
                Ok(None)
            }

            Command::Select { id } => {
                if !self.view.select(id) {
                    // Only reachable with a stale frontend.
                    return Err(CoreError::RowNotDisplayed(id.unwrap_or_default()).into());
                }
                Ok(None)
            }

            Command::Add { name, quantity } => {
                self.form.set_fields(name, quantity);
                if let Some(target) = self.form.pending_target() {
                    return Err(CoreError::EditInProgress { target }.into());
                }
                let (name, quantity) = validate_item_input(self.form.name(), self.form.quantity())?;

                let id = self
                    .store
                    .insert(&name, quantity)
                    .await
                    .map_err(Failure::Store)?;
                debug!(id, name = %name, quantity, "Item added");

                self.refresh().await.map_err(Failure::Store)?;
                self.form.clear();
                Ok(Some(Notice::info("Item added successfully!")))
            }

            Command::Update { name, quantity } => {
                self.form.set_fields(name, quantity);
                let Some(target) = self.form.pending_target() else {
                    // Update control is disabled in add mode.
                    return Ok(None);
                };
                let (name, quantity) = validate_item_input(self.form.name(), self.form.quantity())?;

                self.store
                    .update(target, &name, quantity)
                    .await
                    .map_err(Failure::Store)?;
                debug!(id = target, name = %name, quantity, "Item updated");

                self.refresh().await.map_err(Failure::Store)?;
                self.form.reset();
                Ok(Some(Notice::info("Item updated successfully!")))
            }

            Command::EditSelected => {
                self.load_selected()?;
                Ok(None)
            }

            Command::EditRow { id } => {
                if !self.view.select(Some(id)) {
                    return Err(CoreError::RowNotDisplayed(id).into());
                }
                self.load_selected()?;
                Ok(None)
            }

            Command::DeleteSelected => {
                let id = self
                    .view
                    .selected_item()
                    .map(|item| item.id)
                    .ok_or(CoreError::NoSelection { action: "delete" })?;

                self.store.delete(id).await.map_err(Failure::Store)?;
                debug!(id, "Item deleted");

                if self.form.pending_target() == Some(id) {
                    debug!(id, "Deleted the pending edit target, leaving edit mode");
                    self.form.reset();
                }

                self.refresh().await.map_err(Failure::Store)?;
                Ok(Some(Notice::info("Item deleted successfully!")))
            }

            Command::CancelEdit => {
                self.form.reset();
                Ok(None)
            }

            Command::Clear => {
                self.form.clear();
                Ok(None)
            }

            Command::Search { text } => {
                let text = validate_search_query(&text).map_err(CoreError::Search)?;
                self.view.set_search(text);
                self.refresh().await.map_err(Failure::Store)?;
                Ok(None)
            }

            Command::Sort { column } => {
                let state = self.view.sort(column);
                debug!(?state, "Rows sorted");
                Ok(None)
            }
        }
    }

    fn load_selected(&mut self) -> CoreResult<()> {
        let item = self
            .view
            .selected_item()
            .ok_or(CoreError::NoSelection { action: "edit" })?;
        self.form.load(item);
        Ok(())
    }

    /// Re-queries rows (filtered by the search text) and the unfiltered total.
    async fn refresh(&mut self) -> Result<(), S::Error> {
        let rows = if self.view.search_text().is_empty() {
            self.store.list_all().await?
        } else {
            self.store.search(self.view.search_text()).await?
        };
        let total = self.store.total_quantity().await?;

        debug!(rows = rows.len(), total, "View refreshed");
        self.view.replace(rows, total);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMode;
    use crate::types::SortDirection;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    /// In-memory stand-in for the SQLite repository.
    #[derive(Debug, Default)]
    struct FakeStore {
        rows: Mutex<Vec<Item>>,
        offline: AtomicBool,
    }

    impl FakeStore {
        fn check(&self) -> Result<(), Offline> {
            if self.offline.load(Ordering::SeqCst) {
                Err(Offline)
            } else {
                Ok(())
            }
        }

        fn snapshot(&self) -> Vec<Item> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ItemStore for FakeStore {
        type Error = Offline;

        async fn insert(&self, name: &str, quantity: i64) -> Result<i64, Offline> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|item| item.id).max().unwrap_or(0) + 1;
            rows.push(Item::new(id, name, quantity));
            Ok(id)
        }

        async fn list_all(&self) -> Result<Vec<Item>, Offline> {
            self.check()?;
            Ok(self.snapshot())
        }

        async fn search(&self, text: &str) -> Result<Vec<Item>, Offline> {
            self.check()?;
            let needle = text.to_ascii_lowercase();
            Ok(self
                .snapshot()
                .into_iter()
                .filter(|item| item.name.to_ascii_lowercase().contains(&needle))
                .collect())
        }

        async fn update(&self, id: i64, name: &str, quantity: i64) -> Result<(), Offline> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            if let Some(item) = rows.iter_mut().find(|item| item.id == id) {
                item.name = name.to_string();
                item.quantity = quantity;
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), Offline> {
            self.check()?;
            self.rows.lock().unwrap().retain(|item| item.id != id);
            Ok(())
        }

        async fn total_quantity(&self) -> Result<i64, Offline> {
            self.check()?;
            Ok(self
                .snapshot()
                .iter()
                .fold(0i64, |acc, item| acc.saturating_add(item.quantity)))
        }
    }

    fn add(name: &str, quantity: &str) -> Command {
        Command::Add {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn update(name: &str, quantity: &str) -> Command {
        Command::Update {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    async fn inventory_with(items: &[(&str, &str)]) -> Inventory<FakeStore> {
        let mut inventory = Inventory::open(FakeStore::default()).await.unwrap();
        for (name, quantity) in items {
            inventory.dispatch(add(name, quantity)).await.unwrap();
        }
        inventory
    }

    fn id_of(inventory: &Inventory<FakeStore>, name: &str) -> i64 {
        inventory
            .view()
            .rows()
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.id)
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_valid_item() {
        let mut inventory = inventory_with(&[]).await;

        let outcome = inventory.dispatch(add("  Widget ", "10")).await.unwrap();

        assert_eq!(outcome.notice, Some(Notice::info("Item added successfully!")));
        assert_eq!(inventory.store().snapshot(), vec![Item::new(1, "Widget", 10)]);
        assert_eq!(inventory.view().rows().len(), 1);
        assert_eq!(inventory.view().total(), 10);
        assert_eq!(inventory.form().name(), "");
        assert_eq!(inventory.form().quantity(), "");
    }

    #[tokio::test]
    async fn test_add_invalid_input_is_rejected() {
        let mut inventory = inventory_with(&[("Gadget", "1")]).await;

        for command in [add("Widget", "abc"), add("", "5"), add("Widget", "")] {
            let outcome = inventory.dispatch(command).await.unwrap();
            assert!(outcome.notice.unwrap().is_error());
        }

        assert_eq!(inventory.store().snapshot().len(), 1);
        assert_eq!(inventory.view().total(), 1);
        assert_eq!(inventory.form().mode(), FormMode::Add);
    }

    #[tokio::test]
    async fn test_total_tracks_inserts_and_deletes() {
        let mut inventory = inventory_with(&[("a", "3"), ("b", "5"), ("c", "7")]).await;
        assert_eq!(inventory.view().total(), 15);

        let b = id_of(&inventory, "b");
        inventory.dispatch(Command::Select { id: Some(b) }).await.unwrap();
        let outcome = inventory.dispatch(Command::DeleteSelected).await.unwrap();

        assert_eq!(outcome.notice, Some(Notice::info("Item deleted successfully!")));
        assert_eq!(inventory.view().total(), 10);
        assert_eq!(inventory.view().selected(), None);
    }

    #[tokio::test]
    async fn test_search_filters_rows_but_not_total() {
        let mut inventory = inventory_with(&[("Widget", "4"), ("Gadget", "6")]).await;

        inventory
            .dispatch(Command::Search {
                text: " wid ".to_string(),
            })
            .await
            .unwrap();

        let names: Vec<_> = inventory.view().rows().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["Widget"]);
        assert_eq!(inventory.view().search_text(), "wid");
        assert_eq!(inventory.view().total(), 10);

        // Adding while filtered keeps the filter.
        inventory.dispatch(add("Gizmo", "1")).await.unwrap();
        assert_eq!(inventory.view().rows().len(), 1);
        assert_eq!(inventory.view().total(), 11);

        inventory
            .dispatch(Command::Search {
                text: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(inventory.view().rows().len(), 3);
    }

    #[tokio::test]
    async fn test_search_folds_ascii_case_only() {
        let mut inventory =
            inventory_with(&[("Éclair", "1"), ("éclair", "2"), ("ECLAIR", "3")]).await;

        inventory
            .dispatch(Command::Search {
                text: "é".to_string(),
            })
            .await
            .unwrap();
        let names: Vec<_> = inventory.view().rows().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["éclair"]);

        inventory
            .dispatch(Command::Search {
                text: "eclair".to_string(),
            })
            .await
            .unwrap();
        let names: Vec<_> = inventory.view().rows().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["ECLAIR"]);
    }

    #[tokio::test]
    async fn test_overlong_search_is_rejected() {
        let mut inventory = inventory_with(&[("Widget", "4")]).await;

        let outcome = inventory
            .dispatch(Command::Search {
                text: "w".repeat(crate::MAX_SEARCH_LEN + 1),
            })
            .await
            .unwrap();

        let notice = outcome.notice.unwrap();
        assert!(notice.is_error());
        assert!(notice.message.starts_with("Invalid search:"));
        assert_eq!(inventory.view().search_text(), "");
        assert_eq!(inventory.view().rows().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_then_update_keeps_id() {
        let mut inventory = inventory_with(&[("Widget", "10"), ("Gadget", "1")]).await;
        let id = id_of(&inventory, "Widget");

        inventory.dispatch(Command::Select { id: Some(id) }).await.unwrap();
        let outcome = inventory.dispatch(Command::EditSelected).await.unwrap();
        assert_eq!(outcome.notice, None);
        assert_eq!(inventory.form().mode(), FormMode::Edit { target: id });
        assert_eq!(inventory.form().name(), "Widget");
        assert_eq!(inventory.form().quantity(), "10");

        let outcome = inventory.dispatch(update("Widget2", "20")).await.unwrap();
        assert_eq!(outcome.notice, Some(Notice::info("Item updated successfully!")));

        let rows = inventory.store().snapshot();
        assert_eq!(rows.len(), 2);
        assert!(rows.contains(&Item::new(id, "Widget2", 20)));
        assert_eq!(inventory.form().mode(), FormMode::Add);
        assert!(inventory.form().add_enabled());
        assert!(!inventory.form().update_enabled());
    }

    #[tokio::test]
    async fn test_invalid_update_stays_in_edit_mode() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;
        let id = id_of(&inventory, "Widget");

        inventory.dispatch(Command::EditRow { id }).await.unwrap();
        let outcome = inventory.dispatch(update("Widget", "ten")).await.unwrap();

        assert!(outcome.notice.unwrap().is_error());
        assert_eq!(inventory.form().mode(), FormMode::Edit { target: id });
        assert_eq!(inventory.store().snapshot(), vec![Item::new(id, "Widget", 10)]);
    }

    #[tokio::test]
    async fn test_update_in_add_mode_is_a_no_op() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;

        let outcome = inventory.dispatch(update("Other", "1")).await.unwrap();

        assert_eq!(outcome.notice, None);
        assert_eq!(inventory.store().snapshot(), vec![Item::new(1, "Widget", 10)]);
    }

    #[tokio::test]
    async fn test_add_during_edit_is_rejected() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;
        inventory.dispatch(Command::EditRow { id: 1 }).await.unwrap();

        let outcome = inventory.dispatch(add("New", "1")).await.unwrap();

        assert!(outcome.notice.unwrap().is_error());
        assert_eq!(inventory.store().snapshot().len(), 1);
        assert_eq!(inventory.form().pending_target(), Some(1));
    }

    #[tokio::test]
    async fn test_edit_and_delete_without_selection() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;

        let outcome = inventory.dispatch(Command::EditSelected).await.unwrap();
        assert_eq!(
            outcome.notice,
            Some(Notice::error("Please select an item to edit!"))
        );
        assert_eq!(inventory.form().mode(), FormMode::Add);

        let outcome = inventory.dispatch(Command::DeleteSelected).await.unwrap();
        assert_eq!(
            outcome.notice,
            Some(Notice::error("Please select an item to delete!"))
        );
        assert_eq!(inventory.store().snapshot().len(), 1);
        assert_eq!(inventory.view().total(), 10);
    }

    #[tokio::test]
    async fn test_browsing_leaves_form_fields_alone() {
        let mut inventory = inventory_with(&[("Widget", "10"), ("Gadget", "3")]).await;
        inventory.dispatch(add("Foo", "5x")).await.unwrap();

        let outcome = inventory
            .dispatch(Command::Search {
                text: "wid".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(outcome.notice, None);
        inventory
            .dispatch(Command::Sort {
                column: Column::Name,
            })
            .await
            .unwrap();
        let outcome = inventory.dispatch(Command::EditSelected).await.unwrap();
        assert!(outcome.notice.unwrap().is_error());

        assert_eq!(inventory.form().mode(), FormMode::Add);
        assert_eq!(inventory.form().name(), "Foo");
        assert_eq!(inventory.form().quantity(), "5x");
    }

    #[tokio::test]
    async fn test_deleting_pending_target_cancels_edit() {
        let mut inventory = inventory_with(&[("Widget", "10"), ("Gadget", "2")]).await;
        let widget = id_of(&inventory, "Widget");

        inventory.dispatch(Command::EditRow { id: widget }).await.unwrap();
        inventory.dispatch(Command::DeleteSelected).await.unwrap();

        assert_eq!(inventory.form().mode(), FormMode::Add);
        assert_eq!(inventory.form().name(), "");
        assert_eq!(inventory.store().snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_deleting_other_row_keeps_edit() {
        let mut inventory = inventory_with(&[("Widget", "10"), ("Gadget", "2")]).await;
        let widget = id_of(&inventory, "Widget");
        let gadget = id_of(&inventory, "Gadget");

        inventory.dispatch(Command::EditRow { id: widget }).await.unwrap();
        inventory.dispatch(Command::Select { id: Some(gadget) }).await.unwrap();
        inventory.dispatch(Command::DeleteSelected).await.unwrap();

        assert_eq!(inventory.form().mode(), FormMode::Edit { target: widget });
        assert_eq!(inventory.form().name(), "Widget");
    }

    #[tokio::test]
    async fn test_edit_again_retargets() {
        let mut inventory = inventory_with(&[("Widget", "10"), ("Gadget", "2")]).await;
        let gadget = id_of(&inventory, "Gadget");

        inventory.dispatch(Command::EditRow { id: 1 }).await.unwrap();
        inventory.dispatch(Command::EditRow { id: gadget }).await.unwrap();

        assert_eq!(inventory.form().pending_target(), Some(gadget));
        assert_eq!(inventory.form().name(), "Gadget");
    }

    #[tokio::test]
    async fn test_cancel_and_clear() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;
        inventory.dispatch(Command::EditRow { id: 1 }).await.unwrap();

        inventory.dispatch(Command::Clear).await.unwrap();
        assert_eq!(inventory.form().name(), "");
        assert_eq!(inventory.form().pending_target(), Some(1));

        inventory.dispatch(Command::CancelEdit).await.unwrap();
        assert_eq!(inventory.form().mode(), FormMode::Add);
    }

    #[tokio::test]
    async fn test_sort_then_refresh_restores_store_order() {
        let mut inventory = inventory_with(&[("a", "10"), ("b", "2"), ("c", "33")]).await;

        inventory
            .dispatch(Command::Sort {
                column: Column::Quantity,
            })
            .await
            .unwrap();
        let quantities: Vec<_> = inventory.view().rows().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2, 10, 33]);

        inventory
            .dispatch(Command::Sort {
                column: Column::Quantity,
            })
            .await
            .unwrap();
        let screen = inventory.screen();
        assert_eq!(
            screen.sort.map(|s| s.direction),
            Some(SortDirection::Descending)
        );
        let quantities: Vec<_> = screen.rows.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![33, 10, 2]);

        inventory.dispatch(Command::Refresh).await.unwrap();
        let quantities: Vec<_> = inventory.view().rows().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![10, 2, 33]);
        assert_eq!(inventory.view().active_sort(), None);
    }

    #[tokio::test]
    async fn test_select_unknown_row() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;

        let outcome = inventory
            .dispatch(Command::Select { id: Some(42) })
            .await
            .unwrap();

        assert!(outcome.notice.unwrap().is_error());
        assert_eq!(inventory.view().selected(), None);
    }

    #[tokio::test]
    async fn test_store_fault_propagates() {
        let mut inventory = inventory_with(&[("Widget", "10")]).await;
        inventory.store().offline.store(true, Ordering::SeqCst);

        let result = inventory.dispatch(add("Gadget", "1")).await;
        assert!(result.is_err());

        // Rejections are decided before the store is touched.
        let outcome = inventory.dispatch(add("", "1")).await.unwrap();
        assert!(outcome.notice.unwrap().is_error());
    }

    #[test]
    fn test_command_deserialization() {
        let command: Command =
            serde_json::from_str(r#"{"type":"add","name":"Widget","quantity":"10"}"#).unwrap();
        assert_eq!(command, add("Widget", "10"));

        let command: Command =
            serde_json::from_str(r#"{"type":"sort","column":"quantity"}"#).unwrap();
        assert_eq!(
            command,
            Command::Sort {
                column: Column::Quantity
            }
        );
    }
}
