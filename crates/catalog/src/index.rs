//! Catalog building and indexing logic.
//!
//! Turns a parsed artist list into a [`Catalog`]:
//! - primary index (artist id to position)
//! - derived lists (distinct normalized locations)
//! - year spans used to seed the range filters
//! - a sanity pass that reports, but never rejects, odd records

use crate::location::normalize_location;
use crate::types::*;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

impl Catalog {
    /// Build a catalog from artists in source order.
    ///
    /// Steps:
    /// 1. Index artists by id (first occurrence wins on duplicates)
    /// 2. Collect the distinct normalized locations
    /// 3. Compute creation and first-album year spans
    /// 4. Report suspicious records
    pub fn from_artists(artists: Vec<Artist>) -> Self {
        let mut by_id = HashMap::with_capacity(artists.len());
        for (idx, artist) in artists.iter().enumerate() {
            match by_id.entry(artist.id) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(id = artist.id, name = %artist.name, "Duplicate artist id, keeping first");
                }
            }
        }

        let mut catalog = Catalog {
            artists,
            by_id,
            locations: Vec::new(),
            creation_span: DEFAULT_YEAR_SPAN,
            first_album_span: DEFAULT_YEAR_SPAN,
        };
        catalog.build_location_index();
        catalog.compute_year_spans();
        catalog.report_anomalies();

        tracing::debug!(
            "Catalog built: {} artists, {} locations",
            catalog.artists.len(),
            catalog.locations.len()
        );
        catalog
    }

    /// Collect every distinct normalized location, sorted ascending
    fn build_location_index(&mut self) {
        let unique: BTreeSet<String> = self
            .artists
            .iter()
            .flat_map(|artist| artist.locations.iter())
            .map(|loc| normalize_location(loc))
            .collect();
        self.locations = unique.into_iter().collect();
    }

    /// Compute creation and first-album spans.
    ///
    /// Unknown first-album years (`<= 0`) are ignored; an empty input falls
    /// back to [`DEFAULT_YEAR_SPAN`].
    fn compute_year_spans(&mut self) {
        self.creation_span = span(self.artists.iter().map(|a| a.creation_date))
            .unwrap_or(DEFAULT_YEAR_SPAN);
        self.first_album_span = span(
            self.artists
                .iter()
                .map(|a| a.first_album_year)
                .filter(|&year| year > 0),
        )
        .unwrap_or(DEFAULT_YEAR_SPAN);
    }

    /// Records are never validated away; this only makes them visible in logs.
    fn report_anomalies(&self) {
        for artist in &self.artists {
            if artist.members.is_empty() {
                tracing::warn!(id = artist.id, name = %artist.name, "Artist has no members");
            }
            if artist.first_album_year <= 0 {
                tracing::warn!(
                    id = artist.id,
                    name = %artist.name,
                    first_album = %artist.first_album,
                    "Unknown first album year"
                );
            }
        }
    }
}

fn span(years: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    years.fold(None, |acc, year| match acc {
        None => Some((year, year)),
        Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
    })
}
