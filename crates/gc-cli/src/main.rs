use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gc_cli::commands::{generate, themes, windows};
use gc_cli::{Cli, Commands, Config, process_env};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_ambient(process_env);
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Generate(args)) => {
            generate::run(&mut stdout, &args.apply(config), Utc::now())?;
        }
        Some(Commands::Windows { range, json }) => {
            windows::run(&mut stdout, &config, *range, *json, Utc::now())?;
        }
        Some(Commands::Themes) => {
            themes::run(&mut stdout)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
