//! Parser for artist payloads.
//!
//! Two payload shapes are supported:
//! - a flat JSON array of complete artists (fixture files, or a backend
//!   that already joined everything)
//! - the three groupie-tracker API indexes (`/artists`, `/locations`,
//!   `/relation`), joined here by artist id
//!
//! In both cases the first-album year is derived from the `DD-MM-YYYY`
//! first-album date when the payload does not carry it.

use crate::error::Result;
use crate::types::*;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;

/// Extract the year from a `DD-MM-YYYY` date.
///
/// Returns `0` when the date does not have exactly three parts or the
/// last part is not a number.
pub fn extract_year(date: &str) -> i32 {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return 0;
    }
    parts[2].trim().parse().unwrap_or(0)
}

/// Fill `first_album_year` from `first_album` wherever it is missing
pub fn fill_first_album_years(artists: &mut [Artist]) {
    for artist in artists.iter_mut().filter(|a| a.first_album_year <= 0) {
        artist.first_album_year = extract_year(&artist.first_album);
    }
}

/// Parse a JSON array of complete artists
pub fn parse_artists(json: &str) -> Result<Vec<Artist>> {
    let mut artists: Vec<Artist> = serde_json::from_str(json)?;
    fill_first_album_years(&mut artists);
    Ok(artists)
}

// =============================================================================
// groupie-tracker API payloads
// =============================================================================

/// One record of the `/artists` endpoint.
///
/// The endpoint also carries `locations`, `concertDates` and `relations`
/// fields, but as URLs to the other endpoints; those are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArtist {
    pub id: ArtistId,
    #[serde(default)]
    pub image: String,
    pub name: String,
    pub members: Vec<String>,
    pub creation_date: i32,
    #[serde(default)]
    pub first_album: String,
}

/// `/locations` response: `{"index": [{"id": 1, "locations": [...]}, ...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationIndex {
    pub index: Vec<LocationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// `/relation` response: `{"index": [{"id": 1, "datesLocations": {...}}, ...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationIndex {
    pub index: Vec<RelationEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEntry {
    pub id: ArtistId,
    #[serde(default)]
    pub dates_locations: IndexMap<String, Vec<String>>,
}

pub fn parse_api_artists(json: &str) -> Result<Vec<ApiArtist>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_location_index(json: &str) -> Result<LocationIndex> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_relation_index(json: &str) -> Result<RelationIndex> {
    Ok(serde_json::from_str(json)?)
}

/// Join the three API indexes into complete artists.
///
/// Artists keep the `/artists` order. An artist missing from the
/// locations or relation index simply gets empty lists.
pub fn join_api_indexes(
    artists: Vec<ApiArtist>,
    locations: LocationIndex,
    relations: RelationIndex,
) -> Vec<Artist> {
    let mut locations_by_id: HashMap<ArtistId, Vec<String>> = locations
        .index
        .into_iter()
        .map(|entry| (entry.id, entry.locations))
        .collect();
    let mut relations_by_id: HashMap<ArtistId, IndexMap<String, Vec<String>>> = relations
        .index
        .into_iter()
        .map(|entry| (entry.id, entry.dates_locations))
        .collect();

    let mut joined: Vec<Artist> = artists
        .into_iter()
        .map(|api| Artist {
            locations: locations_by_id.remove(&api.id).unwrap_or_default(),
            dates_locations: relations_by_id.remove(&api.id).unwrap_or_default(),
            id: api.id,
            image: api.image,
            name: api.name,
            members: api.members,
            creation_date: api.creation_date,
            first_album: api.first_album,
            first_album_year: 0,
        })
        .collect();

    fill_first_album_years(&mut joined);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("14-12-1973"), 1973);
        assert_eq!(extract_year("1973"), 0);
        assert_eq!(extract_year("14-12-nope"), 0);
        assert_eq!(extract_year(""), 0);
    }

    #[test]
    fn test_parse_artists_derives_album_year() {
        let json = r#"[
            {
                "id": 1,
                "name": "Queen",
                "members": ["Freddie Mercury", "Brian May", "John Deacon", "Roger Taylor"],
                "creationDate": 1970,
                "firstAlbum": "14-12-1973",
                "locations": ["london-uk"]
            },
            {
                "id": 2,
                "name": "Pink Floyd",
                "members": ["Roger Waters"],
                "creationDate": 1965,
                "firstAlbum": "05-08-1967",
                "firstAlbumYear": 1967
            }
        ]"#;

        let artists = parse_artists(json).unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].first_album_year, 1973);
        assert_eq!(artists[0].locations, vec!["london-uk"]);
        assert!(artists[0].dates_locations.is_empty());
        assert_eq!(artists[1].first_album_year, 1967);
        assert!(artists[1].locations.is_empty());
    }

    #[test]
    fn test_parse_artists_rejects_malformed_json() {
        let err = parse_artists(r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_dates_locations_keep_payload_order() {
        let json = r#"[{
            "id": 7, "name": "Touring", "members": ["A"], "creationDate": 1990,
            "datesLocations": {
                "paris-france": ["01-01-2020"],
                "london-uk": ["02-02-2020"],
                "berlin-germany": ["03-03-2020"]
            }
        }]"#;

        let artists = parse_artists(json).unwrap();
        let keys: Vec<&str> = artists[0].dates_locations.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["paris-france", "london-uk", "berlin-germany"]);
    }

    #[test]
    fn test_join_api_indexes() {
        let artists = parse_api_artists(
            r#"[
                {"id": 1, "image": "q.jpeg", "name": "Queen", "members": ["Freddie Mercury"],
                 "creationDate": 1970, "firstAlbum": "14-12-1973",
                 "locations": "https://example.test/api/locations/1",
                 "concertDates": "https://example.test/api/dates/1",
                 "relations": "https://example.test/api/relation/1"},
                {"id": 2, "image": "", "name": "Nobody", "members": ["X"],
                 "creationDate": 1990, "firstAlbum": "bad"}
            ]"#,
        )
        .unwrap();
        let locations = parse_location_index(
            r#"{"index": [{"id": 1, "locations": ["london-uk", "paris-france"], "dates": "x"}]}"#,
        )
        .unwrap();
        let relations = parse_relation_index(
            r#"{"index": [{"id": 1, "datesLocations": {"london-uk": ["01-01-2020"]}}]}"#,
        )
        .unwrap();

        let joined = join_api_indexes(artists, locations, relations);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].name, "Queen");
        assert_eq!(joined[0].locations, vec!["london-uk", "paris-france"]);
        assert_eq!(joined[0].dates_locations["london-uk"], vec!["01-01-2020"]);
        assert_eq!(joined[0].first_album_year, 1973);
        assert!(joined[1].locations.is_empty());
        assert_eq!(joined[1].first_album_year, 0);
    }
}
