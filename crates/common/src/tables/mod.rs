//! Delimited table loading
//!
//! Reads a header-mapped CSV table into typed rows. The row type drives
//! per-cell coercion through serde (string columns as `Option<String>`,
//! integer columns as `Option<i64>`; empty cells become `None`), and the
//! required-column list is checked against the header up front so a
//! missing or renamed column fails the whole load instead of silently
//! yielding empty rows.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("table not found, checked path: {path}")]
    SourceNotFound { path: String },

    #[error("failed to read table {path}: {message}")]
    Parse { path: String, message: String },
}

impl TableError {
    fn parse(path: &Path, message: impl ToString) -> Self {
        TableError::Parse {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

/// Load a delimited table into typed rows under a fixed schema.
pub fn load_table<T: DeserializeOwned>(
    path: &Path,
    required_columns: &[&str],
) -> Result<Vec<T>, TableError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TableError::SourceNotFound {
            path: path.display().to_string(),
        },
        _ => TableError::parse(path, &e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| TableError::parse(path, &e))?
        .clone();
    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(TableError::parse(
                path,
                format!("missing required column `{}`", column),
            ));
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| TableError::parse(path, &e))?;
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        "Table loaded"
    );

    Ok(rows)
}
