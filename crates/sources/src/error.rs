//! Load failure: the one error kind of the browser.
//!
//! Whatever the source, a failed load is terminal. The variants only say
//! why, so the error view can show something useful.

use catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response (DNS, connection, TLS, body read)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The payload could not be read or parsed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
