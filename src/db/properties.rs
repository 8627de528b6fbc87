use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row};
use tracing::info;

use crate::error::DatabaseError;
use crate::models::PropertyRecord;

use super::connection::open_read_only;

/// The only table the application reads.
pub const TABLE_NAME: &str = "properties";

const OBJECT_TYPE_COLUMN: usize = 0;
const AREA_COLUMN: usize = 1;
// Column 2 is skipped: legacy databases are read with the address taken from
// column 3, and existing files depend on that layout.
const ADDRESS_COLUMN: usize = 3;
const PRICE_COLUMN: usize = 4;
const CLIENT_COLUMN: usize = 5;
/// Smallest column count the positional mapping can work with.
const MIN_COLUMNS: usize = CLIENT_COLUMN + 1;

/// Open the database at `path`, read every listing, and close it again. The
/// rows are collected in full before returning, so a failure half-way through
/// never hands back a partial list.
pub fn load_properties(path: &Path) -> Result<Vec<PropertyRecord>, DatabaseError> {
    info!(path = %path.display(), "loading listings from database");
    let conn = open_read_only(path)?;
    let records = fetch_properties(&conn, path)?;
    info!(count = records.len(), "loaded listings");
    Ok(records)
}

/// Read every row of the properties table in storage order. `path` is only
/// used to annotate errors.
pub fn fetch_properties(
    conn: &Connection,
    path: &Path,
) -> Result<Vec<PropertyRecord>, DatabaseError> {
    let sqlite_error = |source| DatabaseError::Sqlite {
        path: path.to_path_buf(),
        source,
    };

    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {TABLE_NAME}"))
        .map_err(sqlite_error)?;

    let found = stmt.column_count();
    if found < MIN_COLUMNS {
        return Err(DatabaseError::TooFewColumns { found });
    }

    let records = stmt
        .query_map([], map_row)
        .map_err(sqlite_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sqlite_error)?;

    Ok(records)
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        object_type: column_text(row, OBJECT_TYPE_COLUMN)?,
        area: column_text(row, AREA_COLUMN)?,
        address: column_text(row, ADDRESS_COLUMN)?,
        price: column_text(row, PRICE_COLUMN)?,
        client_full_name: column_text(row, CLIENT_COLUMN)?,
    })
}

/// Render any SQLite storage class as display text.
fn column_text(row: &Row<'_>, index: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(index)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(value) => value.to_string(),
        ValueRef::Real(value) => format_real(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            String::from_utf8_lossy(bytes).into_owned()
        }
    })
}

/// Whole-valued reals keep a trailing `.0` so `50.0` does not read as the
/// integer `50`.
fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
