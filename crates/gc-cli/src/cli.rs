//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gc_core::StatsRange;

use crate::commands::generate::GenerateArgs;

/// GitHub stats and contribution streak cards.
///
/// Queries the GitHub GraphQL API and writes two themed SVG cards suitable
/// for embedding in a profile README.
#[derive(Debug, Parser)]
#[command(name = "ghcards", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch contributions and write stats.svg and streak.svg.
    Generate(GenerateArgs),

    /// Print the query windows that would be requested right now.
    Windows {
        /// Stats range (`last_year`, `this_year`, `all_time`).
        #[arg(long)]
        range: Option<StatsRange>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List available themes and their aliases.
    Themes,
}
