//! Free-text search over artist and member names.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Artist;

/// Keeps artists whose name, or any member's name, contains the search
/// text (case-insensitive). An empty search keeps everything.
pub struct TextSearchFilter;

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        let query = criteria.search_query();
        if query.is_empty() {
            return true;
        }
        artist.name.to_lowercase().contains(&query)
            || artist
                .members
                .iter()
                .any(|member| member.to_lowercase().contains(&query))
    }
}
