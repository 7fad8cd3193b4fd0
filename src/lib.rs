//! showscout - Search the TVMaze catalog and browse episode lists
//!
//! This library provides the core functionality for looking up tv shows by
//! name, reshaping the catalog's answers into small view records and
//! rendering them into a page that can be shown in a terminal or written out
//! as an HTML document.

mod catalog;
mod controller;
mod page;
mod terminal;

use thiserror::Error;

// Re-export error types
pub use catalog::CatalogError;
pub use page::RenderError;

// Re-export catalog types
pub use catalog::{
    CatalogConfig, EpisodeSummary, MISSING_IMAGE_URL, ShowCatalog, ShowId, ShowSummary,
    TVMAZE_API_URL, TvMazeCatalog,
};

// Re-export page and controller types
pub use controller::{Controller, UiEvent};
pub use page::{
    ClickTarget, EpisodeEntry, Page, ShowBlock, display_episodes, display_shows, episode_text,
    UNTITLED_EPISODE,
};
pub use terminal::{format_episodes, format_shows, show_label};

/// Progress event emitted while handling UI events
///
/// These events allow library users to track progress and provide feedback
/// while requests are in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Search request sent
    Searching { term: String },

    /// Search results rendered into the show list
    ShowsDisplayed { count: usize },

    /// Episode request sent
    FetchingEpisodes { show_id: ShowId },

    /// Episodes rendered and the episode panel revealed
    EpisodesDisplayed { show_id: ShowId, count: usize },
}

/// Top-level error type for showscout operations
#[derive(Debug, Error)]
pub enum ShowScoutError {
    /// Error during a catalog request
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error while serializing the page
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A click could not be traced back to a show block
    #[error("Clicked element is not inside a show block: {0:?}")]
    NoEnclosingShow(ClickTarget),
}
