//! Location checkboxes narrowed by a secondary search.
//!
//! The search only changes which checkboxes are shown. On commit, a visible
//! location takes its checkbox state; a hidden one keeps whatever the
//! previous commit said. Typing a query therefore never drops locations the
//! user selected earlier.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSelection {
    /// Every known normalized location, sorted
    known: Vec<String>,
    committed: BTreeSet<String>,
    query: String,
    /// Indices into `known` currently shown, ascending
    visible: Vec<usize>,
    /// Checked state of the shown checkboxes
    checked: BTreeSet<String>,
}

impl LocationSelection {
    /// # Arguments
    /// * `known` - every selectable location (sorted and deduplicated here)
    /// * `committed` - the current committed selection
    pub fn new(known: impl IntoIterator<Item = String>, committed: BTreeSet<String>) -> Self {
        let known: Vec<String> = known
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let mut selection = Self {
            known,
            committed,
            query: String::new(),
            visible: Vec::new(),
            checked: BTreeSet::new(),
        };
        selection.refresh_visible();
        selection
    }

    /// Narrow the shown checkboxes to locations containing `query`
    /// (case-insensitive). Shown checkboxes are re-seeded from the
    /// committed selection.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        let needle = self.query.trim().to_lowercase();
        self.visible = self
            .known
            .iter()
            .enumerate()
            .filter(|(_, loc)| needle.is_empty() || loc.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect();
        self.checked = self
            .visible
            .iter()
            .map(|&idx| &self.known[idx])
            .filter(|loc| self.committed.contains(*loc))
            .cloned()
            .collect();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn known(&self) -> &[String] {
        &self.known
    }

    /// Locations currently shown, sorted
    pub fn visible(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible.iter().map(|&idx| self.known[idx].as_str())
    }

    pub fn is_visible(&self, location: &str) -> bool {
        self.known
            .binary_search_by(|known| known.as_str().cmp(location))
            .is_ok_and(|idx| self.shows(idx))
    }

    fn shows(&self, idx: usize) -> bool {
        self.visible.binary_search(&idx).is_ok()
    }

    /// Checked state of a shown checkbox. Hidden locations are never checked.
    pub fn is_checked(&self, location: &str) -> bool {
        self.checked.contains(location)
    }

    /// Tick or untick a shown checkbox. Hidden or unknown locations are
    /// ignored; returns whether the change applied.
    pub fn set_checked(&mut self, location: &str, checked: bool) -> bool {
        if !self.is_visible(location) {
            return false;
        }
        if checked {
            self.checked.insert(location.to_string());
        } else {
            self.checked.remove(location);
        }
        true
    }

    pub fn check_all_visible(&mut self) {
        self.checked = self.visible().map(str::to_string).collect();
    }

    pub fn uncheck_all_visible(&mut self) {
        self.checked.clear();
    }

    /// The last committed selection
    pub fn committed(&self) -> &BTreeSet<String> {
        &self.committed
    }

    /// Fold the checkbox state into the committed selection.
    ///
    /// For every known location: shown => its checkbox decides; hidden =>
    /// previous membership is preserved.
    pub fn commit(&mut self) -> BTreeSet<String> {
        let committed: BTreeSet<String> = self
            .known
            .iter()
            .enumerate()
            .filter(|&(idx, loc)| {
                if self.shows(idx) {
                    self.checked.contains(loc)
                } else {
                    self.committed.contains(loc)
                }
            })
            .map(|(_, loc)| loc.clone())
            .collect();

        tracing::debug!(
            "Committed {} of {} locations ({} shown)",
            committed.len(),
            self.known.len(),
            self.visible.len()
        );
        self.committed = committed.clone();
        committed
    }

    /// Select every known location and clear the search
    pub fn reset(&mut self) {
        self.committed = self.known.iter().cloned().collect();
        self.query.clear();
        self.refresh_visible();
    }
}
