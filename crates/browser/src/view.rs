//! The rendering port.

use crate::detail::ArtistDetail;
use catalog::Artist;
use filter_engine::StatsDisplay;

/// What the controller needs from a front-end.
///
/// Every call receives read-only data derived from the current state;
/// implementations must not assume any call order beyond "list before
/// stats" after each criteria change.
pub trait View {
    /// The filtered artists, in catalog order
    fn render_list(&mut self, artists: &[&Artist]);

    /// One artist's detail page
    fn render_detail(&mut self, detail: &ArtistDetail);

    /// Terminal error page (load failure)
    fn render_error(&mut self, message: &str);

    /// Header statistics for the current list
    fn render_stats(&mut self, stats: &StatsDisplay);
}
