/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields that end up in the view records are declared, serde
/// skips everything else.
use serde::Deserialize;

/// A single entry from the TVMaze search endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Catalog identifier
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork links (null when the show has no artwork)
    pub image: Option<TvMazeImage>,
}

/// Artwork links of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// Medium resolution variant
    pub medium: Option<String>,
}

/// A single episode from the TVMaze episodes endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Catalog identifier
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
