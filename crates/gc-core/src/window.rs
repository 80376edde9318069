//! Query window calculation.
//!
//! GitHub rejects a `contributionsCollection` whose bounds are more than a
//! year apart, and the whole request fails with it. Two windows are derived
//! from an injected `now`:
//!
//! - the **stats window**, selected by [`StatsRange`] and clamped to
//!   [`WindowConfig::max_span_days`];
//! - the **streak window**, a fixed run of days ending at UTC midnight.
//!
//! Both are checked against [`WindowConfig::span_ceiling_days`] before any
//! request is built.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::types::StatsRange;

/// Earliest year the `all_time` range starts from before clamping.
pub const ALL_TIME_START_YEAR: i32 = 2008;

/// Errors raised when a window would be rejected by the data source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The window spans more days than the data source accepts.
    #[error("{kind} window spans {days} days, exceeding the {ceiling}-day ceiling")]
    SpanExceeded {
        kind: WindowKind,
        days: i64,
        ceiling: i64,
    },

    /// The window ends before it starts.
    #[error("{kind} window is inverted: {from} is after {to}")]
    Inverted {
        kind: WindowKind,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },

    /// A date could not be represented.
    #[error("date out of range for {kind} window")]
    OutOfRange { kind: WindowKind },
}

/// Which of the two queried windows an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Stats,
    Streak,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stats => write!(f, "stats"),
            Self::Streak => write!(f, "streak"),
        }
    }
}

/// Limits applied when deriving windows.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Longest stats window before `from` is clamped.
    /// Default: 364.
    pub max_span_days: i64,

    /// Length of the streak window.
    /// Default: 360, leaving a margin for inclusive day counting upstream.
    pub max_streak_days: i64,

    /// Hard ceiling the data source enforces on any single window.
    /// Default: 365.
    pub span_ceiling_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_span_days: 364,
            max_streak_days: 360,
            span_ceiling_days: 365,
        }
    }
}

/// A half-open `[from, to)` query range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContributionWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ContributionWindow {
    #[must_use]
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Length of the window.
    #[must_use]
    pub fn span(&self) -> Duration {
        self.to - self.from
    }

    /// Length of the window in whole days, rounded down.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        self.span().num_days()
    }

    fn validate(&self, kind: WindowKind, ceiling_days: i64) -> Result<(), WindowError> {
        if self.from > self.to {
            return Err(WindowError::Inverted {
                kind,
                from: self.from,
                to: self.to,
            });
        }
        if self.span() > Duration::days(ceiling_days) {
            return Err(WindowError::SpanExceeded {
                kind,
                days: self.span_days(),
                ceiling: ceiling_days,
            });
        }
        Ok(())
    }
}

/// The pair of windows a single data-source request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryWindows {
    pub stats: ContributionWindow,
    pub streak: ContributionWindow,
}

/// Midnight UTC at the start of `date`.
fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Pulls `from` forward so the window is no longer than `max_span_days`.
///
/// A span that cannot be represented as a date offset is reported as
/// [`WindowError::OutOfRange`] for `kind`.
pub fn clamp_window(
    kind: WindowKind,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    max_span_days: i64,
) -> Result<ContributionWindow, WindowError> {
    let out_of_range = || WindowError::OutOfRange { kind };
    let max_span = Duration::try_days(max_span_days).ok_or_else(out_of_range)?;
    let from = if to - from > max_span {
        tracing::debug!(%kind, %from, %to, max_span_days, "clamping window");
        to.checked_sub_signed(max_span).ok_or_else(out_of_range)?
    } else {
        from
    };
    Ok(ContributionWindow::new(from, to))
}

/// Computes the stats window for `range`, ending at `now`.
pub fn stats_window(
    now: DateTime<Utc>,
    range: StatsRange,
    config: &WindowConfig,
) -> Result<ContributionWindow, WindowError> {
    let out_of_range = || WindowError::OutOfRange {
        kind: WindowKind::Stats,
    };
    let from = match range {
        StatsRange::LastYear => now - Duration::days(365),
        StatsRange::ThisYear => {
            utc_midnight(NaiveDate::from_ymd_opt(now.year(), 1, 1).ok_or_else(out_of_range)?)
        }
        StatsRange::AllTime => utc_midnight(
            NaiveDate::from_ymd_opt(ALL_TIME_START_YEAR, 1, 1).ok_or_else(out_of_range)?,
        ),
    };
    clamp_window(WindowKind::Stats, from, now, config.max_span_days)
}

/// Computes the streak window: `max_streak_days` ending at today's UTC midnight.
pub fn streak_window(
    now: DateTime<Utc>,
    config: &WindowConfig,
) -> Result<ContributionWindow, WindowError> {
    let out_of_range = || WindowError::OutOfRange {
        kind: WindowKind::Streak,
    };
    let to = utc_midnight(now.date_naive());
    let length = Duration::try_days(config.max_streak_days).ok_or_else(out_of_range)?;
    let from = to.checked_sub_signed(length).ok_or_else(out_of_range)?;
    Ok(ContributionWindow::new(from, to))
}

/// Computes and validates both windows.
///
/// A window that would still exceed the span ceiling is a configuration
/// mistake, so it is reported here rather than sent to the data source.
pub fn query_windows(
    now: DateTime<Utc>,
    range: StatsRange,
    config: &WindowConfig,
) -> Result<QueryWindows, WindowError> {
    let stats = stats_window(now, range, config)?;
    stats.validate(WindowKind::Stats, config.span_ceiling_days)?;

    let streak = streak_window(now, config)?;
    streak.validate(WindowKind::Streak, config.span_ceiling_days)?;

    Ok(QueryWindows { stats, streak })
}
