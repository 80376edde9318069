//! Core domain logic for ghcards.
//!
//! This crate contains the fundamental types and logic for:
//! - Windows: deriving stats and streak query ranges under the API span ceiling
//! - Streaks: current and longest streak over a sparse daily calendar
//! - Repos: deduplicating contributed repositories
//! - Rows and themes: what the card renderer draws, and in which colors

pub mod repos;
pub mod rows;
pub mod streak;
pub mod theme;
mod types;
pub mod window;

pub use repos::{RepoSet, dedupe_repos};
pub use streak::{calendar_total, compute_streaks, prepare_calendar, today_in};
pub use theme::{Palette, ThemeName, resolve_theme};
pub use types::{
    ConfigValueError, ContributionSnapshot, ContributionTotals, DayRecord, NumberStyle, Row,
    StatsRange, StreakResult,
};
pub use window::{
    ContributionWindow, QueryWindows, WindowConfig, WindowError, WindowKind, query_windows,
};
