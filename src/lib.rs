//! Core library surface for the real-estate register TUI.
//!
//! Listings live in memory for the session. At startup they are seeded from a
//! read-only SQLite table; afterwards new listings are only ever added through
//! the form and never written back.
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod register;
pub mod store;
pub mod table;
pub mod ui;

/// Persistence entry points used by `main.rs` at startup.
pub use db::{load_properties, resolve_db_path, DB_FILE_NAME};

pub use error::{DatabaseError, ValidationError};
pub use models::{DisplayRow, Field, FormValues, PropertyRecord};
pub use register::{Command, Outcome, Register};
pub use store::RecordStore;
pub use table::{SortDirection, TableProjector};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
