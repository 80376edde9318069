//! Streak computation over a daily contribution calendar.
//!
//! # Algorithm Summary
//!
//! 1. Drop calendar entries dated after "today" and sort by date
//!    ([`prepare_calendar`])
//! 2. Longest streak: forward scan where a missing day resets the run just
//!    like an explicit zero-count day
//! 3. Current streak: independent backward walk from "today" that stops at
//!    the first absent or zero-count day
//!
//! "Today" comes from the user's timezone ([`today_in`]), while the calendar
//! itself is bucketed in UTC by the data source.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::types::{DayRecord, StreakResult};

/// The calendar date of `now` as seen from `tz`.
#[must_use]
pub fn today_in(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Establishes the [`compute_streaks`] precondition.
///
/// Drops entries after `today`, sorts by date and keeps the first record
/// seen for any repeated date.
#[must_use]
pub fn prepare_calendar(days: &[DayRecord], today: NaiveDate) -> Vec<DayRecord> {
    let mut prepared: Vec<DayRecord> = days.iter().filter(|d| d.date <= today).copied().collect();
    let dropped = days.len() - prepared.len();
    if dropped > 0 {
        tracing::debug!(dropped, %today, "ignoring future-dated calendar entries");
    }
    prepared.sort_by_key(|d| d.date);
    prepared.dedup_by_key(|d| d.date);
    prepared
}

/// Longest run of consecutive positive days.
///
/// A gap between two records counts as a zero-contribution day.
fn longest_streak(days: &[DayRecord]) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        if let Some(prev) = previous {
            if prev.succ_opt() != Some(day.date) {
                run = 0;
            }
        }
        run = if day.count > 0 { run + 1 } else { 0 };
        longest = longest.max(run);
        previous = Some(day.date);
    }

    longest
}

/// Consecutive positive days ending at `today`.
fn current_streak(days: &[DayRecord], today: NaiveDate) -> u32 {
    let by_date: HashMap<NaiveDate, u32> = days.iter().map(|d| (d.date, d.count)).collect();

    let mut current = 0;
    let mut cursor = Some(today);
    while let Some(date) = cursor {
        match by_date.get(&date) {
            Some(&count) if count > 0 => current += 1,
            _ => break,
        }
        cursor = date.pred_opt();
    }

    current
}

/// Computes current and longest streaks.
///
/// `days` must be sorted ascending by date and contain nothing after
/// `today`; use [`prepare_calendar`] on raw data-source output.
#[must_use]
pub fn compute_streaks(days: &[DayRecord], today: NaiveDate) -> StreakResult {
    debug_assert!(
        days.windows(2).all(|pair| pair[0].date < pair[1].date),
        "calendar must be sorted and unique"
    );
    debug_assert!(
        days.last().is_none_or(|d| d.date <= today),
        "calendar must not extend past today"
    );

    StreakResult {
        current: current_streak(days, today),
        longest: longest_streak(days),
    }
}

/// Total contributions across a prepared calendar.
#[must_use]
pub fn calendar_total(days: &[DayRecord]) -> u64 {
    days.iter().map(|d| u64::from(d.count)).sum()
}
