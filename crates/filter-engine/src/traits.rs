//! Core trait for the filter pipeline.
//!
//! Each clause of the artist filter is one `Filter`. A filter only answers
//! "does this artist pass?"; the pipeline decides how to walk the
//! collection.

use crate::criteria::FilterCriteria;
use catalog::Artist;

/// One clause of the artist filter.
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can be shared behind an `Arc`
/// - Filters are pure: same artist and criteria, same answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `artist` satisfies this clause under `criteria`
    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool;
}
