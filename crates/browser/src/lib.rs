//! Browser crate: the controller behind the artist browser.
//!
//! `ArtistBrowser` owns the application state (catalog, committed
//! criteria, selection, filter panel) and drives an injected `View`.
//! It knows nothing about any concrete UI toolkit.

pub mod controller;
pub mod detail;
pub mod view;

pub use controller::{ArtistBrowser, Phase};
pub use detail::ArtistDetail;
pub use view::View;
