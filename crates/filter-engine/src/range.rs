//! Year ranges and the slider/field synchronization rule.
//!
//! An edit never gets refused. When the new bound would cross the other
//! one, the other bound moves to meet it, so `min <= max` holds after
//! every single edit.

/// An inclusive year interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// A single edit to one end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdit {
    Min(i32),
    Max(i32),
}

impl YearRange {
    /// Build a range, swapping the bounds if they come in reversed
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Inclusive membership test
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }

    /// Set the lower bound; pushes `max` up if `value` exceeds it.
    pub fn set_min(&mut self, value: i32) {
        self.min = value;
        if value > self.max {
            self.max = value;
        }
    }

    /// Set the upper bound; pulls `min` down if `value` is below it.
    pub fn set_max(&mut self, value: i32) {
        self.max = value;
        if value < self.min {
            self.min = value;
        }
    }

    pub fn apply(&mut self, edit: RangeEdit) {
        match edit {
            RangeEdit::Min(value) => self.set_min(value),
            RangeEdit::Max(value) => self.set_max(value),
        }
    }

    /// Pure form of [`apply`](Self::apply)
    pub fn with_edit(mut self, edit: RangeEdit) -> Self {
        self.apply(edit);
        self
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((min, max): (i32, i32)) -> Self {
        Self::new(min, max)
    }
}

/// Which of the two linked controls produced an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeControl {
    Slider,
    Field,
}

/// A range exposed through two controls: a dual slider and a pair of
/// numeric fields. Both always display the same bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedRange {
    slider: YearRange,
    field: YearRange,
    /// Slider travel, usually the catalog's span. Informational only:
    /// typed values outside it are still accepted.
    limits: YearRange,
}

impl LinkedRange {
    /// Both controls start at the full span
    pub fn new(limits: YearRange) -> Self {
        Self {
            slider: limits,
            field: limits,
            limits,
        }
    }

    /// Apply an edit coming from `control` and mirror it on the other one
    pub fn edit(&mut self, control: RangeControl, edit: RangeEdit) -> YearRange {
        let source = match control {
            RangeControl::Slider => &mut self.slider,
            RangeControl::Field => &mut self.field,
        };
        source.apply(edit);
        let synced = *source;
        self.slider = synced;
        self.field = synced;
        tracing::trace!(?control, ?edit, min = synced.min, max = synced.max, "Range edited");
        synced
    }

    pub fn value(&self) -> YearRange {
        self.field
    }

    pub fn slider(&self) -> YearRange {
        self.slider
    }

    pub fn field(&self) -> YearRange {
        self.field
    }

    pub fn limits(&self) -> YearRange {
        self.limits
    }

    /// Back to the full span
    pub fn reset(&mut self) {
        self.slider = self.limits;
        self.field = self.limits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_above_max_pushes_max_up() {
        let mut range = YearRange::new(1960, 1980);
        range.set_min(1990);
        assert_eq!(range, YearRange { min: 1990, max: 1990 });
    }

    #[test]
    fn test_max_below_min_pulls_min_down() {
        let mut range = YearRange::new(1960, 1980);
        range.set_max(1950);
        assert_eq!(range, YearRange { min: 1950, max: 1950 });
    }

    #[test]
    fn test_edits_inside_range_leave_other_bound() {
        let range = YearRange::new(1960, 1980)
            .with_edit(RangeEdit::Min(1965))
            .with_edit(RangeEdit::Max(1975));
        assert_eq!(range, YearRange { min: 1965, max: 1975 });
    }

    #[test]
    fn test_invariant_holds_over_edit_sequence() {
        let edits = [
            RangeEdit::Max(1900),
            RangeEdit::Min(2050),
            RangeEdit::Min(1990),
            RangeEdit::Max(1991),
            RangeEdit::Max(-5),
            RangeEdit::Min(0),
            RangeEdit::Min(3000),
        ];
        let mut range = YearRange::new(1950, 2024);
        for edit in edits {
            range.apply(edit);
            assert!(range.min <= range.max, "broken after {:?}: {:?}", edit, range);
        }
        assert_eq!(range, YearRange { min: 3000, max: 3000 });
    }

    #[test]
    fn test_new_swaps_reversed_bounds() {
        assert_eq!(YearRange::new(2000, 1990), YearRange { min: 1990, max: 2000 });
        assert!(YearRange::new(1990, 2000).contains(1990));
        assert!(YearRange::new(1990, 2000).contains(2000));
        assert!(!YearRange::new(1990, 2000).contains(2001));
    }

    #[test]
    fn test_linked_controls_stay_in_sync() {
        let mut linked = LinkedRange::new(YearRange::new(1958, 2015));

        linked.edit(RangeControl::Slider, RangeEdit::Min(1970));
        assert_eq!(linked.field(), YearRange { min: 1970, max: 2015 });

        linked.edit(RangeControl::Field, RangeEdit::Max(1960));
        assert_eq!(linked.slider(), YearRange { min: 1960, max: 1960 });
        assert_eq!(linked.value(), linked.slider());

        linked.reset();
        assert_eq!(linked.value(), linked.limits());
    }

    #[test]
    fn test_linked_range_accepts_values_outside_limits() {
        let mut linked = LinkedRange::new(YearRange::new(1958, 2015));
        let value = linked.edit(RangeControl::Field, RangeEdit::Max(2030));
        assert_eq!(value, YearRange { min: 1958, max: 2030 });
    }
}
