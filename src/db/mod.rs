//! Read-only access to the persisted listings table.

mod connection;
mod properties;

pub use connection::{open_read_only, resolve_db_path, DB_FILE_NAME};
pub use properties::{fetch_properties, load_properties, TABLE_NAME};
