use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog::{load_catalog, Catalog};
use clap::{Parser, Subcommand};
use reader_core::{apply_view_model, Section, SelectionController, ViewModel};
use serde::Serialize;
use shared::domain::Language;
use storage::{JsonFilePreferenceStore, NullPreferenceStore, PreferenceStore};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod surface;

use config::{load_settings, Settings};
use controller::{
    events::{parse_event_token, UiEvent},
    orchestration::dispatch_ui_event,
};
use surface::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "reader_cli", about = "Drive the bilingual story reader page")]
struct Cli {
    /// TOML story catalog; defaults to the built-in stories.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// JSON file remembering the last story and language.
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,
    #[arg(long, global = true)]
    no_persist: bool,
    /// Print view models as JSON instead of page lines.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Show,
    List,
    SelectStory {
        id: String,
    },
    SelectLanguage {
        code: String,
    },
    /// Replay UI events: card:<id>, key:<id>:<key>, hero:<lang>, reader:<lang>.
    Events {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    Check {
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct StoryListing<'a> {
    id: &'a str,
    title: &'a str,
    languages: Vec<Language>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings()?;
    if let Some(path) = cli.catalog.clone() {
        settings.catalog_path = Some(path);
    }
    if let Some(path) = cli.preferences.clone() {
        settings.preferences_path = path;
    }
    if cli.no_persist {
        settings.persist = false;
    }

    init_tracing(&settings.log_filter);
    run(cli, &settings)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, settings: &Settings) -> Result<()> {
    if let Command::Check { path } = &cli.command {
        return check_catalog(path);
    }

    let catalog = match &settings.catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog '{}'", path.display()))?,
        None => Catalog::builtin(),
    };
    let mut controller = SelectionController::new(catalog, open_store(settings));
    let mut status = String::new();

    match cli.command {
        Command::Show | Command::Check { .. } => {}
        Command::List => return print_story_list(controller.catalog(), cli.json),
        Command::SelectStory { id } => {
            dispatch_ui_event(
                &mut controller,
                UiEvent::CardClicked { story_id: id },
                &mut status,
            );
            report_status(&mut status);
        }
        Command::SelectLanguage { code } => {
            dispatch_ui_event(
                &mut controller,
                UiEvent::LanguageChip {
                    section: Section::Reader,
                    code,
                },
                &mut status,
            );
            report_status(&mut status);
        }
        Command::Events { tokens } => {
            for token in &tokens {
                let event = parse_event_token(token)
                    .with_context(|| format!("invalid event token '{token}'"))?;
                dispatch_ui_event(&mut controller, event, &mut status);
                report_status(&mut status);
            }
        }
    }

    print_view(&controller.current_view_model(), cli.json)
}

fn open_store(settings: &Settings) -> Box<dyn PreferenceStore> {
    if !settings.persist {
        return Box::new(NullPreferenceStore);
    }

    match JsonFilePreferenceStore::open(&settings.preferences_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            let store = JsonFilePreferenceStore::empty(&settings.preferences_path);
            warn!(
                path = %store.path().display(),
                error = %err,
                "ignoring unreadable preferences"
            );
            Box::new(store)
        }
    }
}

fn report_status(status: &mut String) {
    if !status.is_empty() {
        eprintln!("{status}");
        status.clear();
    }
}

fn print_view(view: &ViewModel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    let mut surface = TerminalSurface::new();
    apply_view_model(view, &mut surface);
    println!("{}", surface.render());
    Ok(())
}

fn print_story_list(catalog: &Catalog, json: bool) -> Result<()> {
    let listings: Vec<StoryListing<'_>> = catalog
        .list_stories()
        .iter()
        .map(|story| StoryListing {
            id: story.id.as_str(),
            title: &story.title,
            languages: story.languages().iter().collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    for listing in &listings {
        let languages: Vec<&str> = listing.languages.iter().map(|l| l.code()).collect();
        println!("{}\t{}\t{}", listing.id, listing.title, languages.join(","));
    }
    Ok(())
}

fn check_catalog(path: &Path) -> Result<()> {
    let catalog = load_catalog(path)
        .with_context(|| format!("catalog '{}' is invalid", path.display()))?;
    println!(
        "catalog '{}' is valid: {} stories",
        path.display(),
        catalog.len()
    );
    Ok(())
}
