//! Core domain types for the artist catalog.
//!
//! An [`Artist`] is one record as served by the groupie-tracker API (or a
//! fixture file). A [`Catalog`] is the loaded collection: it keeps the
//! source order, indexes artists by id, and precomputes the values the
//! filter panel needs (distinct locations, year spans).

use crate::location::normalize_location;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for an artist
pub type ArtistId = u32;

/// Year span used when the catalog has nothing to derive one from
pub const DEFAULT_YEAR_SPAN: (i32, i32) = (1950, 2024);

// =============================================================================
// Artist
// =============================================================================

/// A music artist (band or solo act).
///
/// Field names follow the camelCase JSON payload. Optional payload fields
/// default to empty so that a bare `/artists` record still parses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    #[serde(default)]
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    /// First album release date, `DD-MM-YYYY` in the API payload
    #[serde(default)]
    pub first_album: String,
    /// Year of the first album. `0` when unknown.
    ///
    /// Filled from `first_album` by the parser when the payload omits it.
    #[serde(default)]
    pub first_album_year: i32,
    /// Raw hyphen-delimited location tokens, e.g. `"seattle-washington-usa"`
    #[serde(default)]
    pub locations: Vec<String>,
    /// Concert dates per raw location token, in payload order
    #[serde(default)]
    pub dates_locations: IndexMap<String, Vec<String>>,
}

impl Artist {
    /// Number of members in the band
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// The artist's locations in normalized form, in source order
    pub fn normalized_locations(&self) -> impl Iterator<Item = String> + '_ {
        self.locations.iter().map(|loc| normalize_location(loc))
    }
}

// =============================================================================
// Catalog - the loaded collection
// =============================================================================

/// The immutable, in-memory artist collection.
///
/// Built once after the data source resolves; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) artists: Vec<Artist>,
    /// Position of each artist in `artists`
    pub(crate) by_id: HashMap<ArtistId, usize>,
    /// Every distinct normalized location, sorted
    pub(crate) locations: Vec<String>,
    pub(crate) creation_span: (i32, i32),
    pub(crate) first_album_span: (i32, i32),
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::from_artists(Vec::new())
    }

    /// All artists, in the order the source delivered them
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Get an artist by ID
    pub fn get_artist(&self, id: ArtistId) -> Option<&Artist> {
        self.by_id.get(&id).map(|&idx| &self.artists[idx])
    }

    /// Every distinct normalized location across the collection, sorted
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// The same locations as a set, the default "all selected" state
    pub fn location_set(&self) -> BTreeSet<String> {
        self.locations.iter().cloned().collect()
    }

    /// `(oldest, newest)` creation year
    pub fn creation_span(&self) -> (i32, i32) {
        self.creation_span
    }

    /// `(oldest, newest)` known first-album year
    pub fn first_album_span(&self) -> (i32, i32) {
        self.first_album_span
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}
