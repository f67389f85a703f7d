//! # Error Types
//!
//! Domain-specific error types for stock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stock-core errors (this file)                                         │
//! │  ├── CoreError        - Rejected user actions (become notices)         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stock-db errors (separate crate)                                      │
//! │  └── DbError          - Store faults (propagate, never notices)        │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are shown to the user as-is, so they read like the form's prompts
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// A user action the controller refused.
///
/// Every variant is turned into an error notice by the dispatcher; none of
/// them changes the table or the form mode.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Form input failed validation.
    #[error("Please enter valid name and quantity! ({0})")]
    Validation(#[from] ValidationError),

    /// Search text failed validation.
    #[error("Invalid search: {0}")]
    Search(ValidationError),

    /// Edit or delete was invoked without a selected row.
    #[error("Please select an item to {action}!")]
    NoSelection { action: &'static str },

    /// Add was submitted while an edit is pending.
    #[error("Finish or cancel editing item {target} before adding a new one!")]
    EditInProgress { target: i64 },

    /// The requested row is not in the displayed table.
    #[error("Item {0} is not in the table")]
    RowNotDisplayed(i64),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field contains characters outside the accepted set.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value does not fit the stored integer type.
    #[error("{field} is too large")]
    TooLarge { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
