//! Detail-page model for a single artist.

use catalog::{Artist, ArtistId, normalize_location};

/// Concert dates shown on the detail page
pub const MAX_CONCERT_DATES: usize = 10;

/// Everything the detail page shows, precomputed from one artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: ArtistId,
    pub name: String,
    pub image: String,
    pub creation_date: i32,
    pub first_album: String,
    pub members: Vec<String>,
    /// Normalized concert locations
    pub locations: Vec<String>,
    /// Up to [`MAX_CONCERT_DATES`] dates, grouped by location
    pub concert_dates: Vec<String>,
}

impl ArtistDetail {
    /// Locations come from the dates-per-location map when the artist has
    /// one, otherwise from the plain location list. Dates only exist in
    /// the former.
    pub fn from_artist(artist: &Artist) -> Self {
        let (locations, concert_dates) = if artist.dates_locations.is_empty() {
            (artist.normalized_locations().collect(), Vec::new())
        } else {
            (
                artist
                    .dates_locations
                    .keys()
                    .map(|raw| normalize_location(raw))
                    .collect(),
                artist
                    .dates_locations
                    .values()
                    .flatten()
                    .take(MAX_CONCERT_DATES)
                    .cloned()
                    .collect(),
            )
        };

        Self {
            id: artist.id,
            name: artist.name.clone(),
            image: artist.image.clone(),
            creation_date: artist.creation_date,
            first_album: artist.first_album.clone(),
            members: artist.members.clone(),
            locations,
            concert_dates,
        }
    }
}

impl From<&Artist> for ArtistDetail {
    fn from(artist: &Artist) -> Self {
        Self::from_artist(artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist() -> Artist {
        Artist {
            id: 1,
            image: "queen.jpeg".to_string(),
            name: "Queen".to_string(),
            members: vec!["Freddie Mercury".to_string(), "Brian May".to_string()],
            creation_date: 1970,
            first_album: "14-12-1973".to_string(),
            first_album_year: 1973,
            locations: vec!["london-uk".to_string(), "osaka-japan".to_string()],
            dates_locations: Default::default(),
        }
    }

    #[test]
    fn test_falls_back_to_plain_locations() {
        let detail = ArtistDetail::from_artist(&artist());

        assert_eq!(detail.locations, vec!["London, Uk", "Osaka, Japan"]);
        assert!(detail.concert_dates.is_empty());
        assert_eq!(detail.members.len(), 2);
    }

    #[test]
    fn test_uses_dates_locations_and_caps_dates() {
        let mut artist = artist();
        artist.dates_locations.insert(
            "london-uk".to_string(),
            (1..=8).map(|d| format!("{:02}-01-2020", d)).collect(),
        );
        artist.dates_locations.insert(
            "osaka-japan".to_string(),
            (1..=5).map(|d| format!("{:02}-02-2020", d)).collect(),
        );

        let detail = ArtistDetail::from(&artist);
        assert_eq!(detail.locations, vec!["London, Uk", "Osaka, Japan"]);
        assert_eq!(detail.concert_dates.len(), MAX_CONCERT_DATES);
        assert_eq!(detail.concert_dates[0], "01-01-2020");
        assert_eq!(detail.concert_dates[8], "01-02-2020");
    }

    #[test]
    fn test_locations_and_dates_follow_payload_order() {
        let artists = catalog::parser::parse_artists(
            r#"[{
                "id": 5, "name": "Touring", "members": ["A"], "creationDate": 1990,
                "datesLocations": {
                    "paris-france": ["01-01-2020"],
                    "london-uk": ["02-02-2020"]
                }
            }]"#,
        )
        .unwrap();

        let detail = ArtistDetail::from_artist(&artists[0]);
        assert_eq!(detail.locations, vec!["Paris, France", "London, Uk"]);
        assert_eq!(detail.concert_dates, vec!["01-01-2020", "02-02-2020"]);
    }
}
