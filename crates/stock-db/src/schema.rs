//! # Schema
//!
//! The one table the tracker needs, embedded at compile time.
//!
//! ```text
//! items
//! ├── id        INTEGER PRIMARY KEY   (rowid alias, assigned on insert)
//! ├── name      TEXT
//! └── quantity  INTEGER
//! ```
//!
//! The statement is `CREATE TABLE IF NOT EXISTS`, so applying it on every
//! open is idempotent. There are no migrations: the layout is fixed.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Table definition from `schema/items.sql`.
pub const ITEMS_TABLE: &str = include_str!("../schema/items.sql");

/// Creates the items table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring items table exists");

    sqlx::raw_sql(ITEMS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    Ok(())
}

/// Checks whether the items table is present.
pub async fn items_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'items'",
    )
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
