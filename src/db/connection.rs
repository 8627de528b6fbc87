use std::env;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::DatabaseError;

/// SQLite file name looked up in the current working directory at startup.
pub const DB_FILE_NAME: &str = "properties.db";

/// Join `file_name` onto the current working directory.
pub fn resolve_db_path(file_name: &str) -> Result<PathBuf, DatabaseError> {
    let cwd = env::current_dir().map_err(DatabaseError::CurrentDir)?;
    Ok(cwd.join(file_name))
}

/// Open an existing database without write access. Opening read-only (and
/// without `SQLITE_OPEN_CREATE`) means a missing file is reported instead of
/// silently replaced by an empty database.
pub fn open_read_only(path: &Path) -> Result<Connection, DatabaseError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| DatabaseError::Sqlite {
        path: path.to_path_buf(),
        source,
    })
}
