/// Data structures and traits for show catalog lookups.
///
/// This module provides the restricted view records produced from catalog
/// responses (shows and their episodes), as well as the trait implemented
/// by catalog clients.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Base URL of the public TVMaze API
pub const TVMAZE_API_URL: &str = "https://api.tvmaze.com";

/// Image shown for shows the catalog has no artwork for
pub const MISSING_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Errors that can occur during catalog requests.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested show does not exist
    #[error("Show not found: {0}")]
    ShowNotFound(ShowId),
}

/// Numeric identifier of a show in the external catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ShowId)
    }
}

/// A show as displayed in the search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Catalog identifier of the show
    pub id: ShowId,
    /// The show's title
    pub name: String,
    /// Short description, may contain HTML markup
    pub summary: String,
    /// Medium resolution image URL, or the placeholder
    pub image: String,
}

/// A single episode as displayed in the episode list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Catalog identifier of the episode
    pub id: u64,
    /// The episode title, `None` when the catalog has no title yet
    pub name: Option<String>,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Connection settings for a catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Image URL substituted for shows without artwork
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_API_URL.to_string(),
            placeholder_image: MISSING_IMAGE_URL.to_string(),
        }
    }
}

/// Trait for catalogs that can search shows and list their episodes.
///
/// Implementors of this trait can retrieve show listings from TVMaze or any
/// other source exposing the same two lookups.
pub trait ShowCatalog {
    /// Searches the catalog for shows matching a free-text term.
    ///
    /// The term is passed through unvalidated, so an empty term is a valid
    /// query. Results keep the order the catalog returned them in.
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, CatalogError>;

    /// Fetches all episodes of the show with the given identifier.
    ///
    /// Episodes keep the order the catalog returned them in.
    fn fetch_episodes(&self, id: ShowId) -> Result<Vec<EpisodeSummary>, CatalogError>;
}

impl<C: ShowCatalog + ?Sized> ShowCatalog for &C {
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, CatalogError> {
        (**self).search_shows(term)
    }

    fn fetch_episodes(&self, id: ShowId) -> Result<Vec<EpisodeSummary>, CatalogError> {
        (**self).fetch_episodes(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_id_from_str() {
        assert_eq!("42".parse::<ShowId>().unwrap(), ShowId(42));
        assert_eq!(" 7 ".parse::<ShowId>().unwrap(), ShowId(7));
        assert!("batman".parse::<ShowId>().is_err());
        assert!("".parse::<ShowId>().is_err());
    }

    #[test]
    fn test_show_id_display() {
        assert_eq!(ShowId(169).to_string(), "169");
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
        assert_eq!(config.placeholder_image, "https://tinyurl.com/tv-missing");
    }
}
