//! Concert-location filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::{Artist, normalize_location};

/// Keeps artists with at least one accepted location.
///
/// Stored locations are raw tokens, criteria hold normalized names; the
/// raw side is normalized before comparing. Artists without any location
/// always pass.
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        artist.locations.is_empty()
            || artist
                .locations
                .iter()
                .any(|raw| criteria.locations.contains(&normalize_location(raw)))
    }
}
