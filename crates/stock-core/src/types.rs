//! # Domain Types
//!
//! Core domain types used throughout the stock tracker.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     Column      │   │  SortDirection  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (store)     │   │  Id             │   │  Ascending      │       │
//! │  │  name           │   │  Name           │   │  Descending     │       │
//! │  │  quantity       │   │  Quantity       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the store on insert and never changes afterwards.
//! Updates touch `name` and `quantity` only.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Item
// =============================================================================

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier (SQLite rowid).
    pub id: i64,

    /// Display name, trimmed and non-empty when written through the form.
    pub name: String,

    /// Units on hand. Always a whole number >= 0.
    pub quantity: i64,
}

impl Item {
    /// Creates an item value.
    pub fn new(id: i64, name: impl Into<String>, quantity: i64) -> Self {
        Item {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Returns the text shown in the table cell for `column`.
    ///
    /// Sorting works on these strings, the same way a table widget sorts
    /// what it displays.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.to_string(),
            Column::Name => self.name.clone(),
            Column::Quantity => self.quantity.to_string(),
        }
    }
}

// =============================================================================
// Table Columns
// =============================================================================

/// The three columns of the item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Id,
    Name,
    Quantity,
}

impl Column {
    pub(crate) fn index(self) -> usize {
        match self {
            Column::Id => 0,
            Column::Name => 1,
            Column::Quantity => 2,
        }
    }
}

// =============================================================================
// Sort Direction
// =============================================================================

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_cells() {
        let item = Item::new(7, "Widget", 10);
        assert_eq!(item.cell(Column::Id), "7");
        assert_eq!(item.cell(Column::Name), "Widget");
        assert_eq!(item.cell(Column::Quantity), "10");
    }

    #[test]
    fn test_sort_direction_flip() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
        assert_eq!(
            SortDirection::Ascending.flipped(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let json = serde_json::to_string(&Item::new(1, "Gadget", 3)).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Gadget","quantity":3}"#);
    }
}
