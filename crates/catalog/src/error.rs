//! Error types for the catalog crate.
//!
//! Parsing an artist payload is the only fallible step here; everything
//! derived from a loaded catalog (spans, location lists) is total.

use thiserror::Error;

/// Errors that can occur while reading or parsing an artist payload
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The payload could not be read from disk
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not valid JSON, or did not have the expected shape
    #[error("Invalid artist payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
