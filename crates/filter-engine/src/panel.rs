//! The filter panel: edits in progress, not yet committed.
//!
//! Range controls, member checkboxes and location checkboxes all change
//! here freely. Nothing reaches the criteria until [`FilterPanel::commit`].

use crate::criteria::{CriteriaUpdate, MemberBucket};
use crate::location_selection::LocationSelection;
use crate::range::{LinkedRange, RangeControl, RangeEdit, YearRange};
use catalog::Catalog;
use std::collections::BTreeSet;

/// Which year range a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearField {
    Creation,
    FirstAlbum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    creation: LinkedRange,
    first_album: LinkedRange,
    members: BTreeSet<MemberBucket>,
    locations: LocationSelection,
}

impl FilterPanel {
    /// A panel showing the catalog defaults: full spans, every bucket and
    /// every location checked.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            creation: LinkedRange::new(catalog.creation_span().into()),
            first_album: LinkedRange::new(catalog.first_album_span().into()),
            members: MemberBucket::all(),
            locations: LocationSelection::new(
                catalog.locations().iter().cloned(),
                catalog.location_set(),
            ),
        }
    }

    fn range_mut(&mut self, field: YearField) -> &mut LinkedRange {
        match field {
            YearField::Creation => &mut self.creation,
            YearField::FirstAlbum => &mut self.first_album,
        }
    }

    /// Edit one end of a year range from one of its two controls
    pub fn edit_range(&mut self, field: YearField, control: RangeControl, edit: RangeEdit) -> YearRange {
        self.range_mut(field).edit(control, edit)
    }

    pub fn range(&self, field: YearField) -> &LinkedRange {
        match field {
            YearField::Creation => &self.creation,
            YearField::FirstAlbum => &self.first_album,
        }
    }

    pub fn set_member_bucket(&mut self, bucket: MemberBucket, checked: bool) {
        if checked {
            self.members.insert(bucket);
        } else {
            self.members.remove(&bucket);
        }
    }

    /// Replace the member checkboxes wholesale
    pub fn set_member_buckets(&mut self, buckets: impl IntoIterator<Item = MemberBucket>) {
        self.members = buckets.into_iter().collect();
    }

    pub fn member_buckets(&self) -> &BTreeSet<MemberBucket> {
        &self.members
    }

    pub fn locations(&self) -> &LocationSelection {
        &self.locations
    }

    pub fn locations_mut(&mut self) -> &mut LocationSelection {
        &mut self.locations
    }

    /// Everything the panel controls, as one criteria update
    pub fn commit(&mut self) -> CriteriaUpdate {
        let update = CriteriaUpdate {
            search: None,
            creation: Some(self.creation.value()),
            first_album: Some(self.first_album.value()),
            members: Some(self.members.clone()),
            locations: Some(self.locations.commit()),
        };
        tracing::info!(
            creation = ?self.creation.value(),
            first_album = ?self.first_album.value(),
            members = self.members.len(),
            locations = self.locations.committed().len(),
            "Filter panel committed"
        );
        update
    }

    /// Back to catalog defaults
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::for_catalog(catalog);
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::for_catalog(&Catalog::new())
    }
}
