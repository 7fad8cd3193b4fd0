mod logging;

use clap::{ArgAction, Parser, Subcommand};
use dialoguer::{Input, Select};
use showscout::{
    CatalogConfig, ClickTarget, Controller, MISSING_IMAGE_URL, Page, ProgressEvent, ShowCatalog,
    ShowId, ShowScoutError, TVMAZE_API_URL, TvMazeCatalog, UiEvent, display_episodes,
    display_shows, format_episodes, format_shows, show_label,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "showscout")]
#[command(about = "Search TVMaze for tv shows and list their episodes")]
#[command(version)]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, global = true, default_value = TVMAZE_API_URL)]
    api_url: String,

    /// Image URL used for shows without artwork
    #[arg(long, global = true, default_value = MISSING_IMAGE_URL)]
    placeholder_image: String,

    /// Enable verbose logging (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for shows matching a term
    Search {
        /// Free-text search term
        term: String,

        /// Write the rendered page to this HTML file
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Print the show records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the episodes of a show by its TVMaze id
    Episodes {
        /// TVMaze show id
        show_id: ShowId,

        /// Write the rendered page to this HTML file
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Print the episode records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactively search and browse episode lists
    Browse {
        /// Rewrite this HTML file after every search or episode lookup
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,
    },
}

/// Errors surfaced by the command line front-end
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    ShowScout(#[from] ShowScoutError),

    #[error("Failed to write page to {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { term } => {
            println!("\nSearching for '{}'...", term);
        }
        ProgressEvent::ShowsDisplayed { count } => {
            println!("Found {} show(s)\n", count);
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            println!("\nFetching episodes of show {}...", show_id);
        }
        ProgressEvent::EpisodesDisplayed { count, .. } => {
            println!("Found {} episode(s)\n", count);
        }
    }
}

/// Writes the page document, replacing any previous file
fn write_page(page: &Page, path: &Path) -> Result<(), CliError> {
    let html = page.to_html().map_err(ShowScoutError::from)?;
    fs::write(path, html).map_err(|e| CliError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "page written");
    Ok(())
}

fn run_search(
    catalog: &TvMazeCatalog,
    term: &str,
    html: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let shows = catalog.search_shows(term).map_err(ShowScoutError::from)?;

    let mut page = Page::new();
    page.set_search_term(term);
    display_shows(&mut page, &shows);

    if json {
        println!("{}", serde_json::to_string_pretty(&shows)?);
    } else {
        print!("{}", format_shows(&page));
    }

    if let Some(path) = html {
        write_page(&page, path)?;
    }

    Ok(())
}

fn run_episodes(
    catalog: &TvMazeCatalog,
    show_id: ShowId,
    html: Option<&Path>,
    json: bool,
) -> Result<(), CliError> {
    let episodes = catalog
        .fetch_episodes(show_id)
        .map_err(ShowScoutError::from)?;

    let mut page = Page::new();
    display_episodes(&mut page, &episodes);

    if json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
    } else {
        print!("{}", format_episodes(&page));
    }

    if let Some(path) = html {
        write_page(&page, path)?;
    }

    Ok(())
}

/// Feeds one event to the controller
///
/// A failed request leaves the page as it was, so the failure is only
/// logged and the session continues.
fn dispatch(
    controller: &mut Controller<TvMazeCatalog>,
    event: UiEvent,
    html: Option<&Path>,
) -> Result<(), CliError> {
    if let Err(e) = controller.handle(event) {
        error!("{}", e);
        return Ok(());
    }

    if let Some(path) = html {
        write_page(controller.page(), path)?;
    }

    Ok(())
}

fn run_browse(catalog: TvMazeCatalog, html: Option<&Path>) -> Result<(), CliError> {
    let mut controller = Controller::new(catalog).with_progress(handle_progress_event);

    loop {
        let term = Input::<String>::new()
            .with_prompt("Search for a show")
            .allow_empty(true)
            .interact_text()?;

        dispatch(&mut controller, UiEvent::TermEntered(term), html)?;
        dispatch(&mut controller, UiEvent::SearchSubmitted, html)?;
        print!("{}", format_shows(controller.page()));

        loop {
            let block_count = controller.page().shows().len();
            let mut items: Vec<String> = (0..block_count)
                .filter_map(|block| show_label(controller.page(), block))
                .map(|label| format!("Episodes of {}", label))
                .collect();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let choice = Select::new()
                .with_prompt("Choose an action")
                .items(&items)
                .default(0)
                .interact()?;

            if choice == block_count {
                break;
            }
            if choice > block_count {
                return Ok(());
            }

            let target = ClickTarget::EpisodesButton { block: choice };
            dispatch(&mut controller, UiEvent::EpisodesRequested { target }, html)?;
            print!("{}", format_episodes(controller.page()));
        }
    }
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    let catalog = TvMazeCatalog::with_config(CatalogConfig {
        base_url: cli.api_url,
        placeholder_image: cli.placeholder_image,
    });

    let result = match cli.command {
        Command::Search { term, html, json } => {
            run_search(&catalog, &term, html.as_deref(), json)
        }
        Command::Episodes {
            show_id,
            html,
            json,
        } => run_episodes(&catalog, show_id, html.as_deref(), json),
        Command::Browse { html } => run_browse(catalog, html.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
