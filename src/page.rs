//! Page model
//!
//! This module holds the in-memory model of the rendered page: the search
//! form, the show list and the episode panel. Renderers replace a region's
//! contents wholesale, there is no diffing. The page can be serialized to a
//! standalone HTML document.

use crate::catalog::{EpisodeSummary, ShowId, ShowSummary};
use askama::Template;
use thiserror::Error;
use tracing::trace;

/// Errors that can occur while serializing the page
#[derive(Debug, Error)]
pub enum RenderError {
    /// The HTML template failed to render
    #[error("Failed to render page template: {0}")]
    Template(#[from] askama::Error),
}

/// One rendered entry in the show list
///
/// The block is tagged with the id of the show it was rendered from, so a
/// click anywhere inside it can be traced back to the show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowBlock {
    /// The `data-show-id` tag of the block
    pub show_id: ShowId,
    /// Image source, the alt text is the show name
    pub image: String,
    /// Show title
    pub name: String,
    /// Summary markup, inserted into the document unescaped
    pub summary: String,
}

/// One rendered line of the episode list
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeEntry {
    /// Catalog identifier of the episode
    pub episode_id: u64,
    /// Display text, e.g. `Pilot (Season 1, Episode 1)`
    pub text: String,
}

/// Address of a clicked element inside the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The "Episodes" control of the n-th show block
    EpisodesButton { block: usize },
    /// Any other element inside the n-th show block
    ShowBlock { block: usize },
    /// An element outside of every show block
    Outside,
}

/// The rendered page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    search_term: String,
    shows: Vec<ShowBlock>,
    episodes_visible: bool,
    episodes: Vec<EpisodeEntry>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    page: &'a Page,
}

impl Page {
    /// Creates an empty page with the episode panel hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the search form's input
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the contents of the search form's input
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Show blocks in display order
    pub fn shows(&self) -> &[ShowBlock] {
        &self.shows
    }

    /// Episode entries in display order
    pub fn episodes(&self) -> &[EpisodeEntry] {
        &self.episodes
    }

    /// Whether the episode panel is shown
    pub fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }

    /// Hides the episode panel, leaving its list untouched
    pub fn hide_episodes(&mut self) {
        self.episodes_visible = false;
    }

    /// Reveals the episode panel
    pub fn show_episodes(&mut self) {
        self.episodes_visible = true;
    }

    /// Finds the show id tagged on the block enclosing the target
    ///
    /// Returns `None` when the target lies outside of every show block, or
    /// refers to a block that no longer exists.
    pub fn closest_show_id(&self, target: &ClickTarget) -> Option<ShowId> {
        match *target {
            ClickTarget::EpisodesButton { block } | ClickTarget::ShowBlock { block } => {
                self.shows.get(block).map(|b| b.show_id)
            }
            ClickTarget::Outside => None,
        }
    }

    /// Serializes the page to a standalone HTML document
    pub fn to_html(&self) -> Result<String, RenderError> {
        Ok(PageTemplate { page: self }.render()?)
    }
}

/// Stand-in title for episodes the catalog has no name for
pub const UNTITLED_EPISODE: &str = "Unknown";

/// Formats the list line of an episode
pub fn episode_text(episode: &EpisodeSummary) -> String {
    format!(
        "{} (Season {}, Episode {})",
        episode.name.as_deref().unwrap_or(UNTITLED_EPISODE),
        episode.season,
        episode.number
    )
}

/// Replaces the show list with one block per show
pub fn display_shows(page: &mut Page, shows: &[ShowSummary]) {
    page.shows.clear();

    for show in shows {
        page.shows.push(ShowBlock {
            show_id: show.id,
            image: show.image.clone(),
            name: show.name.clone(),
            summary: show.summary.clone(),
        });
    }

    trace!(count = page.shows.len(), "rendered show list");
}

/// Replaces the episode list with one entry per episode and reveals the panel
pub fn display_episodes(page: &mut Page, episodes: &[EpisodeSummary]) {
    page.episodes.clear();

    for episode in episodes {
        page.episodes.push(EpisodeEntry {
            episode_id: episode.id,
            text: episode_text(episode),
        });
    }

    page.show_episodes();
    trace!(count = page.episodes.len(), "rendered episode list");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MISSING_IMAGE_URL;

    fn show(id: u64, name: &str, summary: &str) -> ShowSummary {
        ShowSummary {
            id: ShowId(id),
            name: name.to_string(),
            summary: summary.to_string(),
            image: MISSING_IMAGE_URL.to_string(),
        }
    }

    fn episode(id: u64, name: &str, season: u32, number: u32) -> EpisodeSummary {
        EpisodeSummary {
            id,
            name: Some(name.to_string()),
            season,
            number,
        }
    }

    #[test]
    fn test_new_page_hides_episodes() {
        let page = Page::new();
        assert!(!page.episodes_visible());
        assert!(page.shows().is_empty());
        assert!(page.episodes().is_empty());
    }

    #[test]
    fn test_display_shows_one_block_per_show() {
        let mut page = Page::new();
        let shows = vec![
            show(1, "Batman", "<p>s</p>"),
            show(2, "Batman Beyond", "<p>Neo-Gotham</p>"),
        ];

        display_shows(&mut page, &shows);

        assert_eq!(page.shows().len(), 2);
        for (block, show) in page.shows().iter().zip(&shows) {
            assert_eq!(block.show_id, show.id);
            assert_eq!(block.name, show.name);
            assert_eq!(block.summary, show.summary);
            assert_eq!(block.image, show.image);
        }
    }

    #[test]
    fn test_display_shows_replaces_previous_blocks() {
        let mut page = Page::new();
        display_shows(&mut page, &[show(1, "A", ""), show(2, "B", "")]);
        display_shows(&mut page, &[show(3, "C", "")]);

        assert_eq!(page.shows().len(), 1);
        assert_eq!(page.shows()[0].show_id, ShowId(3));

        display_shows(&mut page, &[]);
        assert!(page.shows().is_empty());
    }

    #[test]
    fn test_display_episodes_formats_and_reveals() {
        let mut page = Page::new();
        display_episodes(&mut page, &[episode(10, "Pilot", 1, 1)]);

        assert!(page.episodes_visible());
        assert_eq!(
            page.episodes(),
            &[EpisodeEntry {
                episode_id: 10,
                text: "Pilot (Season 1, Episode 1)".to_string(),
            }]
        );
    }

    #[test]
    fn test_display_episodes_renders_untitled_entries() {
        let mut page = Page::new();
        let untitled = EpisodeSummary {
            id: 11,
            name: None,
            season: 1,
            number: 2,
        };
        display_episodes(&mut page, &[episode(10, "Pilot", 1, 1), untitled]);

        let texts: Vec<&str> = page.episodes().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Pilot (Season 1, Episode 1)", "Unknown (Season 1, Episode 2)"]
        );
    }

    #[test]
    fn test_display_episodes_replaces_and_keeps_order() {
        let mut page = Page::new();
        display_episodes(&mut page, &[episode(1, "Old", 9, 9)]);
        display_episodes(
            &mut page,
            &[episode(12, "Second", 1, 2), episode(11, "First", 1, 1)],
        );

        let texts: Vec<&str> = page.episodes().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Second (Season 1, Episode 2)", "First (Season 1, Episode 1)"]
        );
    }

    #[test]
    fn test_closest_show_id() {
        let mut page = Page::new();
        display_shows(&mut page, &[show(5, "A", ""), show(8, "B", "")]);

        assert_eq!(
            page.closest_show_id(&ClickTarget::EpisodesButton { block: 1 }),
            Some(ShowId(8))
        );
        assert_eq!(
            page.closest_show_id(&ClickTarget::ShowBlock { block: 0 }),
            Some(ShowId(5))
        );
        assert_eq!(
            page.closest_show_id(&ClickTarget::EpisodesButton { block: 2 }),
            None
        );
        assert_eq!(page.closest_show_id(&ClickTarget::Outside), None);
    }

    #[test]
    fn test_to_html_tags_blocks_and_keeps_summary_markup() {
        let mut page = Page::new();
        display_shows(&mut page, &[show(1, "Batman", "<p>s</p>")]);

        let html = page.to_html().unwrap();
        assert!(html.contains(r#"data-show-id="1""#));
        assert!(html.contains("<small><p>s</p></small>"));
        assert!(html.contains(&format!(r#"src="{}""#, MISSING_IMAGE_URL)));
        assert!(html.contains(r#"alt="Batman""#));
        assert_eq!(html.matches("Show-getEpisodes").count(), 1);
    }

    #[test]
    fn test_to_html_escapes_names() {
        let mut page = Page::new();
        page.set_search_term("tom & jerry");
        display_shows(&mut page, &[show(1, "Tom & Jerry <3", "")]);

        let html = page.to_html().unwrap();
        assert!(html.contains("Tom &amp; Jerry &lt;3"));
        assert!(!html.contains("Tom & Jerry <3"));
        assert!(html.contains("tom &amp; jerry"));
    }

    #[test]
    fn test_to_html_episode_panel_visibility() {
        let mut page = Page::new();
        let hidden = page.to_html().unwrap();
        assert!(hidden.contains(r#"id="episodesArea" style="display: none""#));

        display_episodes(&mut page, &[episode(10, "Pilot", 1, 1)]);
        let visible = page.to_html().unwrap();
        assert!(!visible.contains("display: none"));
        assert!(visible.contains("<li>Pilot (Season 1, Episode 1)</li>"));
    }
}
