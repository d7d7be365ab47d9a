//! In-memory SQLite store for the human mobility dataset.
//!
//! The dataset CSV is loaded once into an in-memory SQLite database and
//! is read-only afterwards. Typed query methods serve the dashboard:
//! the selector catalog, the filtered subset for a [`FilterSelection`],
//! and per-state means over the full dataset.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the dashboard app,
//!   or from a file path in the CLI
//!
//! # Usage
//!
//! ```rust
//! use hmd_db::Database;
//! use hmd_core::FilterSelection;
//!
//! let db = Database::new().unwrap();
//! db.load_mobility("\
//! Date,State,County,Retail_recreation,Grocery_Pharmacy,Parks,Transit,Workplace,Residential
//! 2021-01-01,CA,Los Angeles,-20,-5,10,-40,-30,9
//! 2021-01-02,CA,Los Angeles,-18,-4,12,-38,-29,8
//! ").unwrap();
//!
//! let catalog = db.query_catalog().unwrap();
//! let selection = FilterSelection::initial(&catalog).unwrap();
//! let subset = db.query_filtered(&selection).unwrap();
//! assert_eq!(subset.len(), 2);
//! ```
//!
//! [`FilterSelection`]: hmd_core::FilterSelection

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the mobility dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_mobility`]
    /// or [`Database::load_mobility_file`] to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
