//! # Artist Browser Controller
//!
//! Coordinates the whole application:
//! 1. Await the data source once
//! 2. Build the catalog, default criteria and filter panel
//! 3. Re-filter and re-render on every criteria change
//! 4. Serve detail pages for selected artists
//!
//! All state lives in one `AppState` owned by the controller. After the
//! initial load every operation is synchronous and runs to completion.

use std::time::Instant;

use tracing::{debug, error, info};

use catalog::{Artist, ArtistId, Catalog};
use filter_engine::{CriteriaUpdate, FilterCriteria, FilterPanel, FilterPipeline, ListStats};
use sources::{ArtistSource, LoadError};

use crate::detail::ArtistDetail;
use crate::view::View;

/// Lifecycle of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet
    Loading,
    /// Catalog loaded, list and detail pages available
    Ready,
    /// The load failed; terminal
    Failed(String),
}

/// Everything the browser knows.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    phase: Phase,
    catalog: Catalog,
    /// Last committed criteria
    criteria: FilterCriteria,
    /// Edits in progress in the filter panel
    panel: FilterPanel,
    selected: Option<ArtistId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            catalog: Catalog::new(),
            criteria: FilterCriteria::default(),
            panel: FilterPanel::default(),
            selected: None,
        }
    }
}

/// The controller.
pub struct ArtistBrowser<V: View> {
    state: AppState,
    pipeline: FilterPipeline,
    view: V,
}

impl<V: View> ArtistBrowser<V> {
    /// A browser with the standard filter pipeline and an empty catalog
    pub fn new(view: V) -> Self {
        Self {
            state: AppState::default(),
            pipeline: FilterPipeline::standard(),
            view,
        }
    }

    /// Swap the filter pipeline (e.g. one with a traced artist name)
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Load the artist list from `source`.
    ///
    /// On failure the error page is rendered and the browser stays in
    /// [`Phase::Failed`]; there is no retry.
    ///
    /// # Returns
    /// The number of artists loaded
    pub async fn load<S>(&mut self, source: &S) -> Result<usize, LoadError>
    where
        S: ArtistSource + ?Sized,
    {
        let start_time = Instant::now();
        info!("Loading artists from {}", source.describe());

        let artists = match source.fetch().await {
            Ok(artists) => artists,
            Err(err) => {
                error!("Failed to load artists: {}", err);
                let message = err.to_string();
                self.view.render_error(&message);
                self.state.phase = Phase::Failed(message);
                return Err(err);
            }
        };

        self.install(Catalog::from_artists(artists));
        info!(
            "Loaded {} artists ({} locations) in {:.2?}",
            self.state.catalog.len(),
            self.state.catalog.locations().len(),
            start_time.elapsed()
        );

        self.update_criteria(CriteriaUpdate::default());
        Ok(self.state.catalog.len())
    }

    /// Replace the catalog and reset criteria and panel to its defaults
    fn install(&mut self, catalog: Catalog) {
        self.state.criteria = FilterCriteria::for_catalog(&catalog);
        self.state.panel = FilterPanel::for_catalog(&catalog);
        self.state.catalog = catalog;
        self.state.selected = None;
        self.state.phase = Phase::Ready;
    }

    /// Merge `update` into the committed criteria, re-filter, and render the
    /// list and stats.
    ///
    /// # Returns
    /// The filtered artists, in catalog order
    pub fn update_criteria(&mut self, update: CriteriaUpdate) -> Vec<&Artist> {
        self.state.criteria.merge(update);

        let filtered = self
            .pipeline
            .apply(self.state.catalog.artists(), &self.state.criteria);
        let stats = ListStats::from_artists(&filtered).display();
        debug!("Rendering {} artists ({})", filtered.len(), stats);

        self.view.render_list(&filtered);
        self.view.render_stats(&stats);
        filtered
    }

    /// Live search: applied on every keystroke, no commit needed
    pub fn set_search(&mut self, text: impl Into<String>) -> Vec<&Artist> {
        self.update_criteria(CriteriaUpdate::search(text))
    }

    /// The current filtered list, without re-rendering
    pub fn filtered(&self) -> Vec<&Artist> {
        self.pipeline
            .apply(self.state.catalog.artists(), &self.state.criteria)
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.state.panel
    }

    /// Edit the filter panel; nothing is filtered until [`apply_panel`](Self::apply_panel)
    pub fn panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.state.panel
    }

    /// Commit the panel edits as one criteria update
    pub fn apply_panel(&mut self) -> Vec<&Artist> {
        let update = self.state.panel.commit();
        self.update_criteria(update)
    }

    /// Panel fields back to catalog defaults, committed at once. The live
    /// search is not part of the panel and stays as it is.
    pub fn reset_filters(&mut self) -> Vec<&Artist> {
        info!("Resetting filters");
        self.state.panel.reset(&self.state.catalog);
        let update = self.state.panel.commit();
        self.update_criteria(update)
    }

    /// Show the detail page of artist `id`.
    ///
    /// Returns `None`, and renders nothing, for an unknown id.
    pub fn select(&mut self, id: ArtistId) -> Option<ArtistDetail> {
        let artist = self.state.catalog.get_artist(id)?;
        let detail = ArtistDetail::from_artist(artist);
        debug!("Showing detail for {} ({})", detail.name, id);

        self.state.selected = Some(id);
        self.view.render_detail(&detail);
        Some(detail)
    }

    /// Leave the detail page and show the list again
    pub fn back(&mut self) -> Vec<&Artist> {
        self.state.selected = None;
        self.update_criteria(CriteriaUpdate::default())
    }

    pub fn selected(&self) -> Option<&Artist> {
        self.state
            .selected
            .and_then(|id| self.state.catalog.get_artist(id))
    }

    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
