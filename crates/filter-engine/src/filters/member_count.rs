//! Member-count bucket filter.

use crate::criteria::{FilterCriteria, MemberBucket};
use crate::traits::Filter;
use catalog::Artist;

/// Keeps artists whose member-count bucket is accepted.
///
/// Counts of six and above all fall into [`MemberBucket::SixOrMore`].
pub struct MemberCountFilter;

impl Filter for MemberCountFilter {
    fn name(&self) -> &str {
        "MemberCountFilter"
    }

    fn matches(&self, artist: &Artist, criteria: &FilterCriteria) -> bool {
        MemberBucket::for_count(artist.member_count())
            .is_some_and(|bucket| criteria.members.contains(&bucket))
    }
}
