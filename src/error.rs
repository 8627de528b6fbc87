//! Typed failures surfaced to the user. Both kinds are recoverable: the UI
//! turns them into a dialog and keeps running.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Field;

/// A form submission was rejected before anything was stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {field}")]
    MissingField { field: Field },
}

/// The startup load could not read the properties table.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("could not resolve the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("{source} ({path:?})")]
    Sqlite {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("table `properties` has {found} columns, expected at least 6")]
    TooFewColumns { found: usize },
}
