//! # Item Repository
//!
//! Database operations for stock items.
//!
//! ## Key Operations
//! - Insert / update / delete by id
//! - Case-insensitive substring search on the name
//! - Total stock across every row
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Name Search Works                                │
//! │                                                                         │
//! │  User types: "50%"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Escape LIKE wildcards:  50\%                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  WHERE name LIKE '%50\%%' ESCAPE '\'                                   │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ 1 | Bolts 50% off   | 10               │ ← MATCH                   │
//! │  │ 2 | Bolts 500       | 4                │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  The search text is always literal; `%` and `_` never act as          │
//! │  wildcards. SQLite LIKE ignores ASCII case.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stock_core::{Item, ItemStore};

const SELECT_ITEMS: &str =
    "SELECT id, COALESCE(name, '') AS name, COALESCE(quantity, 0) AS quantity FROM items";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let id = repo.insert("Bolt", 10).await?;
/// let bolts = repo.search("bol").await?;
/// let total = repo.total_quantity().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item and returns its assigned id.
    ///
    /// Ids are never reused while rows with higher ids exist.
    pub async fn insert(&self, name: &str, quantity: i64) -> DbResult<i64> {
        debug!(name = %name, quantity, "Inserting item");

        let result = sqlx::query("INSERT INTO items (name, quantity) VALUES (?1, ?2)")
            .bind(name)
            .bind(quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Returns every item, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!("{SELECT_ITEMS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Returns items whose name contains `text`, ordered by id.
    ///
    /// ## Arguments
    /// * `text` - Literal substring. An empty string matches every row.
    pub async fn search(&self, text: &str) -> DbResult<Vec<Item>> {
        let pattern = format!("%{}%", escape_like(text));

        let items = sqlx::query_as::<_, Item>(&format!(
            "{SELECT_ITEMS} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(text = %text, count = items.len(), "Search returned items");
        Ok(items)
    }

    /// Overwrites name and quantity of the row with `id`.
    ///
    /// A missing id is a no-op.
    pub async fn update(&self, id: i64, name: &str, quantity: i64) -> DbResult<()> {
        let result = sqlx::query("UPDATE items SET name = ?1, quantity = ?2 WHERE id = ?3")
            .bind(name)
            .bind(quantity)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Update matched no row");
        }
        Ok(())
    }

    /// Removes the row with `id`. A missing id is a no-op.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id, "Delete matched no row");
        }
        Ok(())
    }

    /// Sum of all quantities, 0 when the table is empty.
    ///
    /// Saturates at `i64::MAX`. SQLite's `SUM` raises "integer overflow"
    /// past the i64 range, so the sum is folded here instead.
    pub async fn total_quantity(&self) -> DbResult<i64> {
        let quantities: Vec<i64> = sqlx::query_scalar("SELECT COALESCE(quantity, 0) FROM items")
            .fetch_all(&self.pool)
            .await?;

        let total = quantities.iter().fold(0i64, |acc, &q| acc.saturating_add(q));
        if total == i64::MAX {
            debug!(rows = quantities.len(), "Total stock saturated");
        }
        Ok(total)
    }

    /// Number of rows in the table.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Escapes `\`, `%` and `_` so they match literally under `ESCAPE '\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl ItemStore for ItemRepository {
    type Error = DbError;

    async fn insert(&self, name: &str, quantity: i64) -> DbResult<i64> {
        ItemRepository::insert(self, name, quantity).await
    }

    async fn list_all(&self) -> DbResult<Vec<Item>> {
        ItemRepository::list_all(self).await
    }

    async fn search(&self, text: &str) -> DbResult<Vec<Item>> {
        ItemRepository::search(self, text).await
    }

    async fn update(&self, id: i64, name: &str, quantity: i64) -> DbResult<()> {
        ItemRepository::update(self, id, name, quantity).await
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        ItemRepository::delete(self, id).await
    }

    async fn total_quantity(&self) -> DbResult<i64> {
        ItemRepository::total_quantity(self).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
