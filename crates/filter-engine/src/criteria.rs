//! Filter criteria: what the user currently asks for.
//!
//! `FilterCriteria` is the committed state the pipeline evaluates.
//! `CriteriaUpdate` is a partial change; merging it is idempotent.

use crate::range::YearRange;
use catalog::Catalog;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Member-count buckets
// =============================================================================

/// Member-count categories offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberBucket {
    /// Exactly this many members (1 through 5)
    Exactly(u8),
    /// Six members or more
    SixOrMore,
}

impl MemberBucket {
    /// Every bucket, in panel order
    pub const ALL: [MemberBucket; 6] = [
        MemberBucket::Exactly(1),
        MemberBucket::Exactly(2),
        MemberBucket::Exactly(3),
        MemberBucket::Exactly(4),
        MemberBucket::Exactly(5),
        MemberBucket::SixOrMore,
    ];

    /// The bucket a member count falls into. A band with no members has none.
    pub fn for_count(count: usize) -> Option<MemberBucket> {
        match count {
            0 => None,
            1..=5 => Some(MemberBucket::Exactly(count as u8)),
            _ => Some(MemberBucket::SixOrMore),
        }
    }

    pub fn all() -> BTreeSet<MemberBucket> {
        Self::ALL.into_iter().collect()
    }
}

impl fmt::Display for MemberBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberBucket::Exactly(n) => write!(f, "{}", n),
            MemberBucket::SixOrMore => write!(f, "6+"),
        }
    }
}

impl FromStr for MemberBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "6+" => Ok(MemberBucket::SixOrMore),
            other => match other.parse::<u8>() {
                Ok(n @ 1..=5) => Ok(MemberBucket::Exactly(n)),
                _ => Err(format!("invalid member bucket '{}': expected 1-5 or 6+", s)),
            },
        }
    }
}

// =============================================================================
// Criteria
// =============================================================================

/// The committed filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched against artist and member names
    pub search: String,
    pub creation: YearRange,
    pub first_album: YearRange,
    pub members: BTreeSet<MemberBucket>,
    /// Accepted locations, in normalized form
    pub locations: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria that let every artist of `catalog` through: no search, the
    /// catalog's year spans, every bucket, every location.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            search: String::new(),
            creation: catalog.creation_span().into(),
            first_album: catalog.first_album_span().into(),
            members: MemberBucket::all(),
            locations: catalog.location_set(),
        }
    }

    /// Apply every field set in `update`; unset fields keep their value
    pub fn merge(&mut self, update: CriteriaUpdate) {
        if let Some(search) = update.search {
            self.search = search;
        }
        if let Some(creation) = update.creation {
            self.creation = creation;
        }
        if let Some(first_album) = update.first_album {
            self.first_album = first_album;
        }
        if let Some(members) = update.members {
            self.members = members;
        }
        if let Some(locations) = update.locations {
            self.locations = locations;
        }
    }

    /// The search as it is matched: trimmed and lowercased
    pub fn search_query(&self) -> String {
        self.search.trim().to_lowercase()
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::for_catalog(&Catalog::new())
    }
}

/// A partial criteria change. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaUpdate {
    pub search: Option<String>,
    pub creation: Option<YearRange>,
    pub first_album: Option<YearRange>,
    pub members: Option<BTreeSet<MemberBucket>>,
    pub locations: Option<BTreeSet<String>>,
}

impl CriteriaUpdate {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}
