//! # stock-core: Pure Domain Logic for the Stock Tracker
//!
//! This crate is the **heart** of the stock tracker. It contains the item
//! model, input validation, the form state machine, the view model and the
//! command dispatcher, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stock Tracker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (HTML + JS)                         │   │
//! │  │      Form ──► Search Bar ──► Item Table ──► Total Footer        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    add_item, update_item, delete_selected, sort_column, etc.   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stock-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   form    │  │   view    │  │ controller│  │   │
//! │  │   │   Item    │  │ FormState │  │ ViewModel │  │ Inventory │  │   │
//! │  │   │  Column   │  │ FormMode  │  │  sorting  │  │ ItemStore │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • STORE REACHED THROUGH A TRAIT          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stock-db (Database Layer)                    │   │
//! │  │              SQLite items table, ItemRepository                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Column, SortDirection)
//! - [`error`] - Domain error types
//! - [`validation`] - Form input validation
//! - [`form`] - Add/edit state machine
//! - [`view`] - Displayed rows, selection, sort and total
//! - [`controller`] - `Command` dispatch over an [`ItemStore`]
//!
//! ## Example Usage
//!
//! ```rust
//! use stock_core::validation::{parse_quantity, validate_item_name};
//!
//! assert_eq!(validate_item_name("  Widget ").unwrap(), "Widget");
//! assert_eq!(parse_quantity("10").unwrap(), 10);
//! assert!(parse_quantity("abc").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod controller;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use controller::{Command, Inventory, ItemStore, Notice, NoticeKind, Outcome};
pub use error::{CoreError, ValidationError};
pub use form::{FormMode, FormState, FormView};
pub use types::*;
pub use view::{Screen, SortState, ViewModel};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a search query, in characters.
pub const MAX_SEARCH_LEN: usize = 100;

/// Label prefix of the footer showing the running total.
pub const TOTAL_LABEL: &str = "Total Stock";
