//! # Repository Module
//!
//! Database repository implementations for the stock tracker.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Inventory::dispatch (stock-core)                                      │
//! │       │                                                                 │
//! │       │  store.search("bolt")                                          │
//! │       ▼                                                                 │
//! │  ItemRepository (implements ItemStore)                                 │
//! │  ├── insert(&self, name, quantity) → id                                │
//! │  ├── list_all(&self)                                                   │
//! │  ├── search(&self, text)                                               │
//! │  ├── update(&self, id, name, quantity)                                 │
//! │  ├── delete(&self, id)                                                 │
//! │  └── total_quantity(&self)                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Item CRUD, substring search and stock total

pub mod item;
