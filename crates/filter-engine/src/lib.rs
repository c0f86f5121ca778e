//! Filter engine for the artist browser.
//!
//! This crate provides:
//! - `FilterCriteria` and partial `CriteriaUpdate`s
//! - the `Filter` trait and one implementation per clause
//! - `FilterPipeline` for composing filters into the full predicate
//! - range synchronization for the slider/field pairs
//! - location selection that survives a narrowing search
//! - `FilterPanel` for uncommitted edits, and list statistics
//!
//! ## Architecture
//! Criteria are committed state; the panel holds edits in progress. On
//! every criteria change the pipeline re-filters the whole (immutable)
//! catalog, keeping source order:
//! 1. Text search over artist and member names
//! 2. Creation-year and first-album-year ranges
//! 3. Member-count buckets
//! 4. Concert locations (normalized before comparing)
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{FilterCriteria, FilterPipeline, ListStats};
//!
//! let pipeline = FilterPipeline::standard();
//! let mut criteria = FilterCriteria::for_catalog(&catalog);
//! criteria.search = "queen".into();
//!
//! let visible = pipeline.apply(catalog.artists(), &criteria);
//! let stats = ListStats::from_artists(&visible);
//! ```

pub mod traits;
pub mod criteria;
pub mod range;
pub mod filters;
pub mod filter_pipeline;
pub mod location_selection;
pub mod panel;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main types
pub use traits::Filter;
pub use criteria::{CriteriaUpdate, FilterCriteria, MemberBucket};
pub use range::{LinkedRange, RangeControl, RangeEdit, YearRange};
pub use filter_pipeline::FilterPipeline;
pub use location_selection::LocationSelection;
pub use panel::{FilterPanel, YearField};
pub use stats::{ListStats, StatsDisplay, EMPTY_STAT};
