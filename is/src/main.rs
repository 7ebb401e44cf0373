use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use itinstore::SnapshotStore;
use itinstore::cli::{Cli, Command};
use itinstore::config::Config;

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("itinstore starting");

    let store = SnapshotStore::open(&config.store_path)?;

    match cli.command {
        Command::Path => {
            println!("{}", store.snapshot_file().display());
        }
        Command::Dump => {
            if store.exists() {
                let raw = std::fs::read_to_string(store.snapshot_file())?;
                println!("{}", raw);
            } else {
                println!("No snapshot found at {}", store.snapshot_file().display());
            }
        }
        Command::Stats => {
            let document = store.load();
            let activities: usize = document.days().iter().map(|d| d.activities.len()).sum();
            println!("Snapshot: {}", store.snapshot_file().display().to_string().cyan());
            println!("  Days: {}", document.len());
            println!("  Activities: {}", activities);
            match document.active_day() {
                Some(day) => println!("  Active day: {}", day.title),
                None => println!("  Active day: none"),
            }
        }
        Command::Reset => {
            let document = itinstore::Document::sample();
            store.save(&document)?;
            println!("{} Reset snapshot to the sample itinerary", "✓".green());
        }
        Command::Delete => {
            store.delete()?;
            println!("{} Deleted snapshot", "✓".green());
        }
    }

    Ok(())
}
