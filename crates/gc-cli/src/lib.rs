//! ghcards CLI library.
//!
//! This crate provides the command-line interface and configuration for
//! rendering GitHub stats and streak cards.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::{Config, Credentials, process_env};
