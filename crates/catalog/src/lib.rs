//! # Catalog Crate
//!
//! Domain types and loading for the artist collection.
//!
//! ## Main Components
//!
//! - **types**: `Artist` and the immutable `Catalog`
//! - **parser**: JSON payloads (flat arrays and the groupie-tracker API indexes)
//! - **index**: building a `Catalog` (id lookup, location list, year spans)
//! - **location**: raw location token normalization
//! - **error**: error types for parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, parser};
//!
//! let artists = parser::parse_artists(&std::fs::read_to_string("fixtures/artists.json")?)?;
//! let catalog = Catalog::from_artists(artists);
//! let queen = catalog.get_artist(1).unwrap();
//!
//! println!("{} plays in {:?}", queen.name, catalog.locations());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod location;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use location::normalize_location;
pub use types::{Artist, ArtistId, Catalog, DEFAULT_YEAR_SPAN};

#[cfg(test)]
mod tests {
    use super::*;

    fn queen() -> Artist {
        Artist {
            id: 1,
            image: "https://example.test/queen.jpeg".to_string(),
            name: "Queen".to_string(),
            members: vec![
                "Freddie Mercury".to_string(),
                "Brian May".to_string(),
                "John Deacon".to_string(),
                "Roger Taylor".to_string(),
            ],
            creation_date: 1970,
            first_album: "14-12-1973".to_string(),
            first_album_year: 1973,
            locations: vec!["london-uk".to_string(), "new-york-usa".to_string()],
            dates_locations: Default::default(),
        }
    }

    #[test]
    fn test_member_count() {
        assert_eq!(queen().member_count(), 4);
    }

    #[test]
    fn test_normalized_locations_keep_order() {
        let locations: Vec<String> = queen().normalized_locations().collect();
        assert_eq!(locations, vec!["London, Uk", "New, York, Usa"]);
    }

    #[test]
    fn test_catalog_round_trip_through_lookup() {
        let catalog = Catalog::from_artists(vec![queen()]);
        let retrieved = catalog.get_artist(1).unwrap();

        assert_eq!(retrieved.name, "Queen");
        assert_eq!(catalog.creation_span(), (1970, 1970));
        assert_eq!(catalog.location_set().len(), 2);
    }
}
