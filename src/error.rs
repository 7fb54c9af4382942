//! Error types for the volleyball match tracker

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, VolleyError>;

#[derive(Error, Debug)]
pub enum VolleyError {
    #[error("Malformed packed {shape} {input:?}: {reason}")]
    Format {
        shape: &'static str,
        input: String,
        reason: String,
    },

    #[error("Could not open match database at {}: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{operation} failed for {subject}: {source}")]
    Storage {
        operation: &'static str,
        subject: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{operation} called on a closed match database")]
    Closed { operation: &'static str },

    #[error("Table {table} is listed before its dependency {dependency}")]
    Schema { table: String, dependency: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine a data directory for the match database")]
    NoDataDir,
}

impl VolleyError {
    /// Build a `Format` error for a packed value of the given shape.
    pub(crate) fn format(shape: &'static str, input: &str, reason: impl Into<String>) -> Self {
        VolleyError::Format {
            shape,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Adapter for `map_err` on storage calls.
    pub(crate) fn storage(
        operation: &'static str,
        subject: impl Into<String>,
    ) -> impl FnOnce(rusqlite::Error) -> Self {
        let subject = subject.into();
        move |source| VolleyError::Storage {
            operation,
            subject,
            source,
        }
    }
}
