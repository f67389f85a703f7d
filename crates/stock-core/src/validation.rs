//! # Validation Module
//!
//! Input validation for the item form and the search bar.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (JS)                                                │
//! │  └── Sends raw field text, no checks                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Form Controller (Rust)                                       │
//! │  └── THIS MODULE: presence + numeric checks                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository / SQLite                                          │
//! │  └── Trusts its caller, no constraints beyond the column types         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stock_core::validation::{parse_quantity, validate_item_name};
//!
//! let name = validate_item_name(" Widget ").unwrap();
//! let quantity = parse_quantity("10").unwrap();
//! assert_eq!((name.as_str(), quantity), ("Widget", 10));
//! ```

use crate::error::ValidationError;
use crate::MAX_SEARCH_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming surrounding whitespace
///
/// ## Example
/// ```rust
/// use stock_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("Gadget").unwrap(), "Gadget");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    Ok(name.to_string())
}

/// Validates a search query and returns it trimmed.
///
/// ## Rules
/// - Can be empty (lists every item)
/// - Maximum [`MAX_SEARCH_LEN`] characters
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search",
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses the quantity field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be non-empty and made only of ASCII decimal digits
///   (so signs, decimal points and exponents are all rejected)
/// - Must fit in an `i64`
///
/// ## Example
/// ```rust
/// use stock_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("007").unwrap(), 7);
/// assert!(parse_quantity("-1").is_err());
/// assert!(parse_quantity("1.5").is_err());
/// ```
pub fn parse_quantity(quantity: &str) -> ValidationResult<i64> {
    let quantity = quantity.trim();

    if quantity.is_empty() {
        return Err(ValidationError::Required { field: "quantity" });
    }

    if !quantity.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "quantity",
            reason: "must contain only digits",
        });
    }

    quantity
        .parse::<i64>()
        .map_err(|_| ValidationError::TooLarge { field: "quantity" })
}

/// Validates both form fields at once.
///
/// Name errors are reported before quantity errors.
pub fn validate_item_input(name: &str, quantity: &str) -> ValidationResult<(String, i64)> {
    let name = validate_item_name(name)?;
    let quantity = parse_quantity(quantity)?;
    Ok((name, quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================
