//! The FilterPipeline chains the filter clauses.
//!
//! An artist is kept iff every filter matches. Stages run in insertion
//! order over the shrinking list, so the output keeps the collection's
//! relative order (stable filter, no re-sorting).

use crate::criteria::FilterCriteria;
use crate::filters::{
    CreationYearFilter, FirstAlbumYearFilter, LocationFilter, MemberCountFilter,
    TextSearchFilter,
};
use crate::traits::Filter;
use catalog::Artist;

/// Chains multiple filters together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard().with_trace_name("queen");
/// let visible = pipeline.apply(catalog.artists(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    /// Lowercased name fragment whose rejections get logged
    trace_name: Option<String>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline (keeps everything).
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            trace_name: None,
        }
    }

    /// All five clauses: text, creation year, first album year, members, location.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(TextSearchFilter)
            .add_filter(CreationYearFilter)
            .add_filter(FirstAlbumYearFilter)
            .add_filter(MemberCountFilter)
            .add_filter(LocationFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Log, at debug level, which clauses reject any artist whose name
    /// contains `name` (case-insensitive). Diagnostics only.
    pub fn with_trace_name(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim().to_lowercase();
        self.trace_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Names of the filters, in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// The full predicate: true iff every filter matches
    pub fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        self.filters.iter().all(|f| f.matches(artist, criteria))
    }

    /// Apply all filters in sequence to the artists.
    ///
    /// ## Algorithm
    /// 1. Start from every artist, in source order
    /// 2. For each filter in order, keep the artists it matches and log the
    ///    input/output counts
    /// 3. Return what is left
    pub fn apply<'a>(&self, artists: &'a [Artist], criteria: &FilterCriteria) -> Vec<&'a Artist> {
        if self.trace_name.is_some() {
            self.trace_rejections(artists, criteria);
        }

        let mut current: Vec<&'a Artist> = artists.iter().collect();
        for filter in &self.filters {
            let input_count = current.len();
            current.retain(|artist| filter.matches(artist, criteria));
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        tracing::debug!("{} of {} artists after filtering", current.len(), artists.len());
        current
    }

    fn trace_rejections(&self, artists: &[Artist], criteria: &FilterCriteria) {
        let Some(trace_name) = &self.trace_name else {
            return;
        };
        for artist in artists
            .iter()
            .filter(|a| a.name.to_lowercase().contains(trace_name.as_str()))
        {
            let failed: Vec<&str> = self
                .filters
                .iter()
                .filter(|f| !f.matches(artist, criteria))
                .map(|f| f.name())
                .collect();
            if !failed.is_empty() {
                tracing::debug!(
                    artist = %artist.name,
                    failed = ?failed,
                    locations = ?artist.locations,
                    accepted_locations = criteria.locations.len(),
                    "Traced artist filtered out"
                );
            }
        }
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
