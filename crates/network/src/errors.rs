//! Graph builder error types

use papergraph_common::tables::TableError;
use thiserror::Error;

/// Failures a builder can report. All variants are folded into the
/// error payload shape at the builder boundary; none cross it.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("source table not found, checked path: {path}")]
    SourceNotFound { path: String },

    #[error("failed to parse source table {path}: {message}")]
    Parse { path: String, message: String },

    #[error("data processing failed: {message}")]
    Processing { message: String },
}

impl From<TableError> for GraphError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::SourceNotFound { path } => GraphError::SourceNotFound { path },
            TableError::Parse { path, message } => GraphError::Parse { path, message },
        }
    }
}
