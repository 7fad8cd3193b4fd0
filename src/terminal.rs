//! Plain-text views of the page regions for terminal output.

use crate::page::Page;

/// Formats the show list, one numbered block per show
///
/// Summaries are converted from HTML to plain text.
pub fn format_shows(page: &Page) -> String {
    if page.shows().is_empty() {
        return "No shows found.\n".to_string();
    }

    let mut output = String::new();

    for (index, block) in page.shows().iter().enumerate() {
        output.push_str(&format!(
            "[{}] {} (id {})\n",
            index + 1,
            block.name,
            block.show_id
        ));
        output.push_str(&format!("    Image: {}\n", block.image));

        let summary = summary_text(&block.summary);
        if !summary.is_empty() {
            output.push_str(&format!("    {}\n", summary));
        }
        output.push('\n');
    }

    output
}

/// Formats the episode panel, or nothing while it is hidden
pub fn format_episodes(page: &Page) -> String {
    if !page.episodes_visible() {
        return String::new();
    }

    let mut output = String::from("=== Episodes ===\n");
    for entry in page.episodes() {
        output.push_str(&format!("  {}\n", entry.text));
    }
    output
}

/// Short label of a show block for selection menus
pub fn show_label(page: &Page, block: usize) -> Option<String> {
    page.shows()
        .get(block)
        .map(|b| format!("{} (id {})", b.name, b.show_id))
}

/// Converts summary markup to a single line of text
fn summary_text(summary: &str) -> String {
    nanohtml2text::html2text(summary)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
