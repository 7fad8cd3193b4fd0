//! Event coordination
//!
//! The controller owns the catalog client and the page it renders into.
//! Each UI event runs to completion: a catalog request followed by a render.
//! When the request fails the page is left exactly as it was and the error
//! is handed back to the caller.

use crate::catalog::{ShowCatalog, ShowId};
use crate::page::{ClickTarget, Page, display_episodes, display_shows};
use crate::{ProgressEvent, ShowScoutError};
use tracing::debug;

/// User interaction delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text typed into the search form's input
    TermEntered(String),
    /// The search form was submitted
    SearchSubmitted,
    /// An element inside the show list was clicked
    EpisodesRequested { target: ClickTarget },
}

/// Coordinates catalog requests and page rendering
pub struct Controller<C: ShowCatalog> {
    catalog: C,
    page: Page,
    progress: Box<dyn FnMut(ProgressEvent)>,
}

impl<C: ShowCatalog> Controller<C> {
    /// Creates a controller with an empty page and silent progress reporting
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            page: Page::new(),
            progress: Box::new(|_| {}),
        }
    }

    /// Sets the callback that receives progress events
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use showscout::{Controller, ProgressEvent, TvMazeCatalog};
    ///
    /// let mut controller = Controller::new(TvMazeCatalog::new()).with_progress(|event| {
    ///     if let ProgressEvent::ShowsDisplayed { count } = event {
    ///         println!("{} show(s) found", count);
    ///     }
    /// });
    /// controller.search_and_display("batman").unwrap();
    /// ```
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ProgressEvent) + 'static,
    {
        self.progress = Box::new(callback);
        self
    }

    /// The page as currently rendered
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Dispatches a UI event to its handler
    pub fn handle(&mut self, event: UiEvent) -> Result<(), ShowScoutError> {
        debug!(?event, "handling ui event");

        match event {
            UiEvent::TermEntered(term) => {
                self.page.set_search_term(&term);
                Ok(())
            }
            UiEvent::SearchSubmitted => {
                let term = self.page.search_term().to_string();
                self.search_and_display(&term)
            }
            UiEvent::EpisodesRequested { target } => {
                let id = self
                    .page
                    .closest_show_id(&target)
                    .ok_or(ShowScoutError::NoEnclosingShow(target))?;
                self.episodes_and_display(id)
            }
        }
    }

    /// Searches for shows and replaces the show list with the results
    ///
    /// The episode panel is hidden so a previous show's episodes do not stay
    /// visible under the new results.
    pub fn search_and_display(&mut self, term: &str) -> Result<(), ShowScoutError> {
        (self.progress)(ProgressEvent::Searching {
            term: term.to_string(),
        });

        let shows = self.catalog.search_shows(term)?;

        self.page.hide_episodes();
        display_shows(&mut self.page, &shows);

        (self.progress)(ProgressEvent::ShowsDisplayed { count: shows.len() });
        Ok(())
    }

    /// Fetches the episodes of a show, renders them and reveals the panel
    pub fn episodes_and_display(&mut self, id: ShowId) -> Result<(), ShowScoutError> {
        (self.progress)(ProgressEvent::FetchingEpisodes { show_id: id });

        let episodes = self.catalog.fetch_episodes(id)?;

        display_episodes(&mut self.page, &episodes);

        (self.progress)(ProgressEvent::EpisodesDisplayed {
            show_id: id,
            count: episodes.len(),
        });
        Ok(())
    }
}
