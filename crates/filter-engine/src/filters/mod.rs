//! Filter implementations for the artist pipeline.
//!
//! One filter per clause; an artist is kept only if every filter matches.

pub mod text_search;
pub mod year_range;
pub mod member_count;
pub mod location;

// Re-export for convenience
pub use text_search::TextSearchFilter;
pub use year_range::{CreationYearFilter, FirstAlbumYearFilter};
pub use member_count::MemberCountFilter;
pub use location::LocationFilter;
