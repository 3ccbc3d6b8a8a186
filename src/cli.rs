use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `SHOWCAL_CONFIG_FILE` environment variable will be used,
    /// and failing that the built-in defaults.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search shows by name.
    Search { query: String },
    /// List the episodes of a show that have not aired yet.
    Episodes { id: i64 },
    /// Print the calendar events for the upcoming episodes of a show as JSON.
    Events { id: i64 },
}
