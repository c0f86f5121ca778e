//! The data-source port.
//!
//! The browser awaits exactly one `fetch` at startup. Adapters decide where
//! the artists come from; the controller never sees reqwest or the
//! filesystem.

use crate::error::Result;
use async_trait::async_trait;
use catalog::Artist;

/// Supplies the raw artist list once.
#[async_trait]
pub trait ArtistSource: Send + Sync {
    /// Human-readable origin, for logs and error messages
    fn describe(&self) -> String;

    /// Fetch the complete artist list, in source order.
    ///
    /// # Returns
    /// * `Ok(Vec<Artist>)` - every artist, first-album years filled in
    /// * `Err(LoadError)` - the source was unreachable or answered badly
    async fn fetch(&self) -> Result<Vec<Artist>>;
}
