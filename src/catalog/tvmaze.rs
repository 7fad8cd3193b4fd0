/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogConfig, CatalogError, EpisodeSummary, ShowCatalog, ShowId, ShowSummary};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Show catalog backed by the TVMaze API.
///
/// This catalog queries https://api.tvmaze.com (or the configured base URL)
/// using the show search and show episodes endpoints.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    config: CatalogConfig,
}

impl TvMazeCatalog {
    /// Creates a new TVMaze catalog using the public API.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Creates a TVMaze catalog with a custom base URL or placeholder image.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self::with_client(reqwest::blocking::Client::new(), config)
    }

    fn with_client(client: reqwest::blocking::Client, config: CatalogConfig) -> Self {
        Self {
            client,
            config: CatalogConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    /// Converts a TVMaze search result to a show summary.
    ///
    /// Falls back to the placeholder image when the show has no artwork
    /// or the artwork lacks a medium resolution variant.
    fn convert_show(result: TvMazeSearchResult, placeholder_image: &str) -> ShowSummary {
        let show = result.show;
        ShowSummary {
            id: ShowId(show.id),
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image: show
                .image
                .and_then(|image| image.medium)
                .unwrap_or_else(|| placeholder_image.to_string()),
        }
    }

    /// Converts a TVMaze episode to an episode summary.
    fn convert_episode(episode: TvMazeEpisode) -> EpisodeSummary {
        EpisodeSummary {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        }
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// A 404 response is reported as `Ok(None)` so callers can map it to
    /// their own not-found error.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, CatalogError> {
        debug!(url, ?query, "catalog request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }

        // Ensure request was successful
        if !response.status().is_success() {
            return Err(CatalogError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        // Read the body first so decoding errors carry serde's message
        let body = response
            .text()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        parse_body(&body).map(Some)
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowCatalog for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, CatalogError> {
        let url = format!("{}/search/shows", self.config.base_url);

        // The search endpoint answers unknown terms with an empty array, a
        // 404 here means the base URL is wrong
        let results: Vec<TvMazeSearchResult> = self
            .get_json(&url, &[("q", term)])?
            .ok_or_else(|| CatalogError::RequestError(format!("HTTP 404 Not Found: {url}")))?;

        let shows: Vec<ShowSummary> = results
            .into_iter()
            .map(|result| Self::convert_show(result, &self.config.placeholder_image))
            .collect();

        debug!(term, count = shows.len(), "search returned shows");
        Ok(shows)
    }

    fn fetch_episodes(&self, id: ShowId) -> Result<Vec<EpisodeSummary>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.config.base_url, id);

        let episodes: Vec<TvMazeEpisode> = self
            .get_json(&url, &[])?
            .ok_or(CatalogError::ShowNotFound(id))?;

        let episodes: Vec<EpisodeSummary> =
            episodes.into_iter().map(Self::convert_episode).collect();

        debug!(%id, count = episodes.len(), "episode list fetched");
        Ok(episodes)
    }
}

/// Decodes a JSON response body.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::ParseError(e.to_string()))
}
