//! # View Model
//!
//! The rows currently shown in the item table, plus everything the table
//! and footer need to render: search text, selection, sort, and total.
//!
//! ## Refresh vs Sort
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  refresh ──► rows = store.list_all()        (search text empty)         │
//! │          └─► rows = store.search(text)      (search text set)           │
//! │          └─► total = store.total_quantity() (never filtered)            │
//! │                                                                         │
//! │  sort(column) ──► reorders `rows` in place, no store access             │
//! │                   next refresh restores store order                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sort Rule
//! The column's displayed values are compared as integers when every one of
//! them parses as an integer, otherwise as text. So quantities `10, 2, 33`
//! sort as `2, 10, 33`, not `10, 2, 33`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::{FormState, FormView};
use crate::types::{Column, Item, SortDirection};
use crate::TOTAL_LABEL;

/// The sort last applied to the displayed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// Displayed rows and table state.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    rows: Vec<Item>,
    search: String,
    selected: Option<i64>,
    total: i64,
    /// Direction each column sorts in next, indexed by `Column::index`.
    next_direction: [SortDirection; 3],
    active_sort: Option<SortState>,
}

impl ViewModel {
    /// Creates an empty view with no search and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn active_sort(&self) -> Option<SortState> {
        self.active_sort
    }

    /// Footer text, e.g. `Total Stock: 15`.
    pub fn footer(&self) -> String {
        format!("{}: {}", TOTAL_LABEL, self.total)
    }

    /// Sets the search text used by the next refresh.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Looks up a displayed row.
    pub fn row(&self, id: i64) -> Option<&Item> {
        self.rows.iter().find(|item| item.id == id)
    }

    /// The selected row, if it is still displayed.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.row(id))
    }

    /// Selects a displayed row, or clears the selection with `None`.
    ///
    /// Returns `false` (and clears the selection) when `id` is not displayed.
    pub fn select(&mut self, id: Option<i64>) -> bool {
        match id {
            Some(id) if self.row(id).is_some() => {
                self.selected = Some(id);
                true
            }
            Some(_) => {
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    /// Replaces the displayed rows after a store query.
    ///
    /// Drops any applied sort, and drops the selection if its row is gone.
    pub fn replace(&mut self, rows: Vec<Item>, total: i64) {
        self.rows = dedup_by_id(rows);
        self.total = total;
        self.active_sort = None;
        if self.selected_item().is_none() {
            self.selected = None;
        }
    }

    /// Sorts the displayed rows by `column`.
    ///
    /// Each column starts ascending and flips on every further sort of the
    /// same column. Sorting is stable.
    pub fn sort(&mut self, column: Column) -> SortState {
        let direction = self.next_direction[column.index()];
        self.next_direction[column.index()] = direction.flipped();

        let rows = std::mem::take(&mut self.rows);
        let cells: Vec<String> = rows.iter().map(|item| item.cell(column)).collect();
        let numeric: Option<Vec<i64>> = cells.iter().map(|cell| cell.parse().ok()).collect();

        self.rows = match numeric {
            Some(keys) => sort_by_keys(keys, rows, direction),
            None => sort_by_keys(cells, rows, direction),
        };

        let state = SortState { column, direction };
        self.active_sort = Some(state);
        state
    }
}

fn sort_by_keys<K: Ord>(keys: Vec<K>, rows: Vec<Item>, direction: SortDirection) -> Vec<Item> {
    let mut pairs: Vec<(K, Item)> = keys.into_iter().zip(rows).collect();
    pairs.sort_by(|a, b| oriented(a.0.cmp(&b.0), direction));
    pairs.into_iter().map(|(_, item)| item).collect()
}

fn oriented(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Keeps the first row for each id.
fn dedup_by_id(rows: Vec<Item>) -> Vec<Item> {
    let mut seen = std::collections::HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|item| seen.insert(item.id)).collect()
}

// =============================================================================
// Screen Snapshot
// =============================================================================

/// Everything the frontend needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub form: FormView,
    pub search: String,
    pub rows: Vec<Item>,
    pub selected: Option<i64>,
    pub sort: Option<SortState>,
    pub total: i64,
    pub footer: String,
}

impl Screen {
    pub fn capture(form: &FormState, view: &ViewModel) -> Self {
        Screen {
            form: form.view(),
            search: view.search.clone(),
            rows: view.rows.clone(),
            selected: view.selected,
            sort: view.active_sort,
            total: view.total,
            footer: view.footer(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
