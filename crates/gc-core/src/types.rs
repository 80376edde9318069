//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for configuration values that name a closed set of choices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigValueError {
    /// The stats range was not one of `last_year`, `this_year`, `all_time`.
    #[error("unknown stats range: {0} (expected last_year, this_year or all_time)")]
    UnknownStatsRange(String),

    /// The number style was not one of `accent`, `pill`.
    #[error("unknown number style: {0} (expected accent or pill)")]
    UnknownNumberStyle(String),
}

/// Lowercases and maps `-` to `_` so `All-Time` and `all_time` agree.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Which span of history the stats card covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatsRange {
    /// The 365 days before now.
    #[default]
    LastYear,
    /// Since Jan 1 of the current UTC year.
    ThisYear,
    /// Since the earliest supported date, subject to the span clamp.
    AllTime,
}

impl StatsRange {
    pub const ALL: [Self; 3] = [Self::LastYear, Self::ThisYear, Self::AllTime];

    /// Configuration spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LastYear => "last_year",
            Self::ThisYear => "this_year",
            Self::AllTime => "all_time",
        }
    }

    /// Human-readable label used in card titles.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LastYear => "last year",
            Self::ThisYear => "this year",
            Self::AllTime => "all time",
        }
    }
}

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatsRange {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "last_year" => Ok(Self::LastYear),
            "this_year" => Ok(Self::ThisYear),
            "all_time" => Ok(Self::AllTime),
            _ => Err(ConfigValueError::UnknownStatsRange(s.to_string())),
        }
    }
}

impl Serialize for StatsRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatsRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How numeric values are highlighted on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberStyle {
    /// Values drawn in the accent color.
    #[default]
    Accent,
    /// Values drawn inside a tinted rounded pill.
    Pill,
}

impl NumberStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Pill => "pill",
        }
    }
}

impl fmt::Display for NumberStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NumberStyle {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "accent" => Ok(Self::Accent),
            "pill" => Ok(Self::Pill),
            _ => Err(ConfigValueError::UnknownNumberStyle(s.to_string())),
        }
    }
}

impl Serialize for NumberStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NumberStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Contribution count for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayRecord {
    #[must_use]
    pub const fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Current and longest streak, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

/// Aggregate counts for the stats window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionTotals {
    pub stars: u64,
    pub commits: u64,
    pub pull_requests: u64,
    pub reviews: u64,
    pub issues: u64,
}

/// Everything a single data-source response yields for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionSnapshot {
    pub login: String,
    pub totals: ContributionTotals,
    pub commit_repos: Vec<String>,
    pub issue_repos: Vec<String>,
    pub pull_request_repos: Vec<String>,
    /// Per-day counts for the streak window, in the order the source returned them.
    pub calendar: Vec<DayRecord>,
    /// Total reported by the calendar itself.
    pub calendar_total: u64,
}

/// A labelled value ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
