//! Static fixture source.

use crate::error::Result;
use crate::traits::ArtistSource;
use async_trait::async_trait;
use catalog::{Artist, CatalogError, parser};
use std::path::PathBuf;

/// Reads a JSON array of artists from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArtistSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Artist>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let artists = parser::parse_artists(&content)?;
        tracing::debug!("Read {} artists from {}", artists.len(), self.path.display());
        Ok(artists)
    }
}
