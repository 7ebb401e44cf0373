//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use itinstore::MoveDirection;

use crate::prefs::{Layout, Theme};

/// TripPlanner - local-first itinerary planner
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Organize trip days and timed activities",
    version,
    after_help = "Logs are written to: ~/.local/share/tripplanner/logs/tripplanner.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Manage trip days
    Day {
        #[command(subcommand)]
        command: DayCommand,
    },

    /// Manage activities on the active day
    Act {
        #[command(subcommand)]
        command: ActivityCommand,
    },

    /// Show the itinerary
    Show {
        /// Read-only presentation (no indices or editing hints)
        #[arg(long)]
        view: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Export the itinerary as JSON
    Export {
        /// Output file (defaults to the configured export file name)
        output: Option<PathBuf>,
    },

    /// Import an exported itinerary, replacing all days
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Reset the itinerary to the sample template
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Resolve a day's activities to a route of coordinates
    Map {
        /// Day index to map (defaults to the active day)
        #[arg(short, long)]
        day: Option<usize>,
    },

    /// Set or toggle the color theme
    Theme {
        /// dark or light; omit to toggle
        value: Option<Theme>,
    },

    /// Set or toggle the day listing layout
    Layout {
        /// grid or list; omit to toggle
        value: Option<Layout>,
    },
}

/// Day subcommands
#[derive(Subcommand)]
pub enum DayCommand {
    /// Add a new day and make it active
    Add,

    /// Delete the active day
    Rm,

    /// Duplicate the active day
    Dup,

    /// Move a day up or down
    Mv {
        /// Day index (0-based)
        index: usize,

        /// Direction: up or down
        direction: MoveDirection,
    },

    /// Rename the active day
    Rename {
        /// New title, set verbatim
        title: String,
    },

    /// Select the active day
    Select {
        /// Day index (0-based)
        index: usize,
    },
}

/// Activity subcommands (all address the active day)
#[derive(Subcommand)]
pub enum ActivityCommand {
    /// Add an activity
    Add {
        /// Time label (free-form)
        #[arg(short, long, default_value = "")]
        time: String,

        /// Activity title (required non-empty)
        #[arg(short = 'T', long)]
        title: String,

        /// Category label
        #[arg(long, default_value = "")]
        category: String,
    },

    /// Replace an activity wholesale; omitted fields become empty
    Edit {
        /// Activity index (0-based)
        index: usize,

        #[arg(short, long, default_value = "")]
        time: String,

        #[arg(short = 'T', long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Duplicate an activity
    Dup {
        /// Activity index (0-based)
        index: usize,
    },

    /// Delete an activity
    Rm {
        /// Activity index (0-based)
        index: usize,
    },

    /// Move an activity to a new position
    Mv {
        /// Current index (0-based)
        from: usize,

        /// Target index (0-based)
        to: usize,
    },

    /// Remove duplicate activities (same time and title)
    Dedupe,
}

/// Output format for the show command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
