//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Stock Tracker                      │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('add_item')                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<ScreenResponse, ApiError>                                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rejected input? ─── notice inside Ok(ScreenResponse) ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store fault? ─── DbError::QueryFailed("...") ── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('add_item', { name, quantity })                         │
//! │  } catch (e) {                                                          │
//! │    // e.code = "DATABASE_ERROR"                                         │
//! │    // e.message = "Database operation failed"                           │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use stock_db::DbError;

/// API error returned from Tauri commands.
///
/// Rejected input never lands here; it comes back as a notice inside
/// `Ok(ScreenResponse)`. Only store faults become an `ApiError`.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "DATABASE_ERROR",
///   "message": "Database connection failed"
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Store fault
    DatabaseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

/// Converts database errors to API errors.
///
/// The underlying SQLite message is logged, never sent to the window.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(e) => {
                tracing::error!("Schema setup failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database schema setup failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Timed out waiting for the database connection");
                ApiError::new(ErrorCode::DatabaseError, "Database is busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_errors_become_database_error() {
        for err in [
            DbError::ConnectionFailed("gone".into()),
            DbError::QueryFailed("no such table: items".into()),
            DbError::PoolExhausted,
        ] {
            let api = ApiError::from(err);
            assert_eq!(api.code, ErrorCode::DatabaseError);
            assert!(!api.message.contains("items"));
        }
    }

    #[test]
    fn test_display_carries_code_and_message() {
        let api = ApiError::new(ErrorCode::DatabaseError, "Database is busy");
        assert_eq!(api.to_string(), "[DatabaseError] Database is busy");
    }

    #[test]
    fn test_serialized_shape() {
        let json =
            serde_json::to_value(ApiError::new(ErrorCode::DatabaseError, "Database is busy"))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "DATABASE_ERROR", "message": "Database is busy" })
        );
    }
}
