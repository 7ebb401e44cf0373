//! TripPlanner - itinerary planner CLI entry point
//!
//! Every mutating command follows the same discipline: load the document,
//! apply one operation, save, then print the result. Rendering is a pure
//! projection of the saved state.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use itinstore::{Activity, ImportOutcome, SnapshotStore, transfer};
use tripplanner::cli::{ActivityCommand, Cli, Command, DayCommand, OutputFormat};
use tripplanner::config::Config;
use tripplanner::geo::{Coordinate, NominatimClient, RoutePlanner};
use tripplanner::prefs::{Layout, Prefs, Theme};
use tripplanner::render::{ViewOptions, render_document};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplanner")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Setup tracing subscriber - write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("tripplanner.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("tripplanner loaded config: store-dir={}", config.storage.store_dir);

    let store_dir = PathBuf::from(&config.storage.store_dir);
    let store = SnapshotStore::open(&store_dir).context("Failed to open snapshot store")?;

    match cli.command {
        Command::Day { command } => cmd_day(&store, command),
        Command::Act { command } => cmd_activity(&store, command),
        Command::Show { view, format } => cmd_show(&store, &store_dir, view, format),
        Command::Export { output } => cmd_export(&store, &config, output),
        Command::Import { file } => cmd_import(&store, &file),
        Command::Clear { yes } => cmd_clear(&store, yes),
        Command::Map { day } => cmd_map(&store, &config, day).await,
        Command::Theme { value } => cmd_theme(&store_dir, value),
        Command::Layout { value } => cmd_layout(&store_dir, value),
    }
}

fn cmd_day(store: &SnapshotStore, command: DayCommand) -> Result<()> {
    let mut document = store.load_or_init()?;

    match command {
        DayCommand::Add => {
            let title = document.add_day().title.clone();
            store.save(&document)?;
            println!("{} Added {}", "✓".green(), title.cyan());
        }
        DayCommand::Rm => match document.delete_active_day() {
            Some(day) => {
                store.save(&document)?;
                println!("{} Deleted {}", "✓".green(), day.title.cyan());
            }
            None => println!("No days to delete"),
        },
        DayCommand::Dup => {
            let title = document.duplicate_active_day()?.title.clone();
            store.save(&document)?;
            println!("{} Added {}", "✓".green(), title.cyan());
        }
        DayCommand::Mv { index, direction } => {
            if document.move_day(index, direction)? {
                store.save(&document)?;
                println!("{} Moved day {} {}", "✓".green(), index, direction);
            } else {
                println!("Day {} cannot move {}", index, direction);
            }
        }
        DayCommand::Rename { title } => {
            document.rename_active_day(title.as_str())?;
            store.save(&document)?;
            println!("{} Renamed active day to {}", "✓".green(), title.cyan());
        }
        DayCommand::Select { index } => {
            document.set_active_day(index)?;
            store.save(&document)?;
            let title = document.active_day().map(|d| d.title.clone()).unwrap_or_default();
            println!("{} Selected {}", "✓".green(), title.cyan());
        }
    }

    Ok(())
}

fn cmd_activity(store: &SnapshotStore, command: ActivityCommand) -> Result<()> {
    let mut document = store.load_or_init()?;

    match command {
        ActivityCommand::Add { time, title, category } => {
            let added = document.add_activity(&time, &title, &category)?.title.clone();
            store.save(&document)?;
            println!("{} Added {}", "✓".green(), added.cyan());
        }
        ActivityCommand::Edit {
            index,
            time,
            title,
            category,
            notes,
        } => {
            document.update_activity(
                index,
                Activity {
                    time,
                    title,
                    category,
                    notes,
                },
            )?;
            store.save(&document)?;
            println!("{} Updated activity {}", "✓".green(), index);
        }
        ActivityCommand::Dup { index } => {
            let title = document.duplicate_activity(index)?.title.clone();
            store.save(&document)?;
            println!("{} Added {}", "✓".green(), title.cyan());
        }
        ActivityCommand::Rm { index } => {
            let removed = document.delete_activity(index)?;
            store.save(&document)?;
            println!("{} Deleted {}", "✓".green(), removed.title.cyan());
        }
        ActivityCommand::Mv { from, to } => {
            if document.move_activity(from, to)? {
                store.save(&document)?;
                println!("{} Moved activity {} to {}", "✓".green(), from, to);
            } else {
                println!("Activity {} is already at {}", from, to);
            }
        }
        ActivityCommand::Dedupe => {
            let removed = document.dedupe_active_day_activities()?;
            store.save(&document)?;
            if removed == 0 {
                println!("No duplicates found");
            } else {
                println!("{} Removed {} duplicate activities", "✓".green(), removed);
            }
        }
    }

    Ok(())
}

fn cmd_show(store: &SnapshotStore, store_dir: &Path, view: bool, format: OutputFormat) -> Result<()> {
    let document = store.load_or_init()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        OutputFormat::Text => {
            let options = ViewOptions {
                prefs: Prefs::load(store_dir),
                view_only: view,
            };
            print!("{}", render_document(&document, &options));
        }
    }

    Ok(())
}

fn cmd_export(store: &SnapshotStore, config: &Config, output: Option<PathBuf>) -> Result<()> {
    let document = store.load_or_init()?;
    let path = output.unwrap_or_else(|| PathBuf::from(&config.export.file_name));

    transfer::export_to_file(&document, &path)?;
    println!("{} Exported {} days to {}", "✓".green(), document.len(), path.display());
    Ok(())
}

fn cmd_import(store: &SnapshotStore, file: &Path) -> Result<()> {
    let mut document = store.load_or_init()?;

    match transfer::import_from_file(&mut document, file)? {
        ImportOutcome::Replaced => {
            store.save(&document)?;
            println!("{} Imported {} days from {}", "✓".green(), document.len(), file.display());
        }
        ImportOutcome::Ignored => {
            println!("{} Import ignored: not a valid itinerary export", "⚠".yellow());
        }
    }

    Ok(())
}

fn cmd_clear(store: &SnapshotStore, yes: bool) -> Result<()> {
    if !yes {
        println!("This replaces the itinerary with the sample template. Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut document = store.load_or_init()?;
    document.reset_to_sample();
    store.save(&document)?;
    println!("{} Reset itinerary to the sample template", "✓".green());
    Ok(())
}

async fn cmd_map(store: &SnapshotStore, config: &Config, day_index: Option<usize>) -> Result<()> {
    let document = store.load_or_init()?;

    let day = match day_index {
        Some(index) => document
            .days()
            .get(index)
            .ok_or_else(|| eyre::eyre!("No day at index {} (length {})", index, document.len()))?,
        None => document
            .active_day()
            .ok_or_else(|| eyre::eyre!("No active day to map"))?,
    };

    let client = NominatimClient::from_config(&config.geocoder)?;
    let mut planner = RoutePlanner::new(
        client,
        config.geocoder.query_suffix.as_str(),
        Coordinate {
            lat: config.geocoder.fallback_lat,
            lon: config.geocoder.fallback_lon,
        },
    );

    let route = planner.plan(day).await;

    println!("Route for {}", day.title.cyan());
    if let Some(center) = route.center {
        println!("  No places resolved; centering on {:.4}, {:.4}", center.lat, center.lon);
        return Ok(());
    }

    for (index, stop) in route.stops.iter().enumerate() {
        println!(
            "  {}. {} ({:.4}, {:.4})",
            index + 1,
            stop.name,
            stop.coord.lat,
            stop.coord.lon
        );
    }
    if route.stops.len() > 1 {
        let path: Vec<&str> = route.stops.iter().map(|s| s.name.as_str()).collect();
        println!("  Path: {}", path.join(" -> "));
    }

    Ok(())
}

fn cmd_theme(store_dir: &Path, value: Option<Theme>) -> Result<()> {
    let mut prefs = Prefs::load(store_dir);
    prefs.theme = value.unwrap_or_else(|| prefs.theme.toggled());
    prefs.save(store_dir)?;
    println!("{} Theme set to {}", "✓".green(), prefs.theme);
    Ok(())
}

fn cmd_layout(store_dir: &Path, value: Option<Layout>) -> Result<()> {
    let mut prefs = Prefs::load(store_dir);
    prefs.layout = value.unwrap_or_else(|| prefs.layout.toggled());
    prefs.save(store_dir)?;
    println!("{} Layout set to {}", "✓".green(), prefs.layout);
    Ok(())
}
