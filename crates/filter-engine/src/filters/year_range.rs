//! Inclusive year-range filters.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use catalog::Artist;

/// Keeps artists whose creation year lies in `criteria.creation`.
pub struct CreationYearFilter;

impl Filter for CreationYearFilter {
    fn name(&self) -> &str {
        "CreationYearFilter"
    }

    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        criteria.creation.contains(artist.creation_date)
    }
}

/// Keeps artists whose first-album year lies in `criteria.first_album`.
///
/// An unknown year is `0` and is compared like any other value.
pub struct FirstAlbumYearFilter;

impl Filter for FirstAlbumYearFilter {
    fn name(&self) -> &str {
        "FirstAlbumYearFilter"
    }

    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        criteria.first_album.contains(artist.first_album_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::YearRange;
    use crate::test_utils::queen;

    #[test]
    fn test_creation_bounds_are_inclusive() {
        let mut criteria = FilterCriteria::default();

        criteria.creation = YearRange::new(1970, 1980);
        assert!(CreationYearFilter.matches(&queen(), &criteria));

        criteria.creation = YearRange::new(1960, 1970);
        assert!(CreationYearFilter.matches(&queen(), &criteria));

        criteria.creation = YearRange::new(1971, 1980);
        assert!(!CreationYearFilter.matches(&queen(), &criteria));
    }

    #[test]
    fn test_first_album_range() {
        let mut criteria = FilterCriteria::default();

        criteria.first_album = YearRange::new(1973, 1973);
        assert!(FirstAlbumYearFilter.matches(&queen(), &criteria));

        criteria.first_album = YearRange::new(1974, 2000);
        assert!(!FirstAlbumYearFilter.matches(&queen(), &criteria));
    }

    #[test]
    fn test_unknown_album_year_outside_real_ranges() {
        let mut artist = queen();
        artist.first_album_year = 0;

        let criteria = FilterCriteria::default();
        assert!(!FirstAlbumYearFilter.matches(&artist, &criteria));
    }
}
