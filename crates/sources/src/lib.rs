//! # Sources Crate
//!
//! Where the artist list comes from.
//!
//! ## Components
//!
//! - [`ArtistSource`]: the async port the browser awaits once at startup
//! - [`FileSource`]: a JSON fixture on disk
//! - [`HttpSource`]: one endpoint returning complete artists
//! - [`GroupieApiSource`]: the public groupie-tracker API (three endpoints, joined)
//! - [`AnySource`]: runtime choice between the above
//!
//! Every failure surfaces as a [`LoadError`]; there is no retry.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{ArtistSource, GroupieApiSource};
//!
//! let source = GroupieApiSource::default();
//! let artists = source.fetch().await?;
//! ```

// Public modules
pub mod error;
pub mod traits;
pub mod file;
pub mod http;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{LoadError, Result};
pub use traits::ArtistSource;
pub use file::FileSource;
pub use http::{GroupieApiSource, HttpSource, GROUPIE_API_URL};

use async_trait::async_trait;
use catalog::Artist;

/// One of the concrete sources, picked at runtime (e.g. from CLI flags).
#[derive(Debug, Clone)]
pub enum AnySource {
    File(FileSource),
    Http(HttpSource),
    Groupie(GroupieApiSource),
}

#[async_trait]
impl ArtistSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::File(source) => source.describe(),
            AnySource::Http(source) => source.describe(),
            AnySource::Groupie(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Artist>> {
        let artists = match self {
            AnySource::File(source) => source.fetch().await?,
            AnySource::Http(source) => source.fetch().await?,
            AnySource::Groupie(source) => source.fetch().await?,
        };
        tracing::info!("Fetched {} artists from {}", artists.len(), self.describe());
        Ok(artists)
    }
}

impl From<FileSource> for AnySource {
    fn from(source: FileSource) -> Self {
        AnySource::File(source)
    }
}

impl From<HttpSource> for AnySource {
    fn from(source: HttpSource) -> Self {
        AnySource::Http(source)
    }
}

impl From<GroupieApiSource> for AnySource {
    fn from(source: GroupieApiSource) -> Self {
        AnySource::Groupie(source)
    }
}
