//! Print the query windows without contacting GitHub.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use chrono_tz::Tz;
use gc_core::{ContributionWindow, QueryWindows, StatsRange, query_windows, today_in};

use crate::Config;

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    range: Option<StatsRange>,
    json: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    let range = range.unwrap_or(config.stats_range);
    let tz = config.tz()?;
    let today = today_in(now, tz);
    let windows =
        query_windows(now, range, &config.window_config()).context("invalid query window")?;

    if json {
        let output = serde_json::json!({
            "today": today,
            "timezone": tz.name(),
            "range": range,
            "stats": windows.stats,
            "streak": windows.streak,
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        write!(writer, "{}", format_windows(&windows, range, today, tz))?;
    }
    Ok(())
}

fn format_window(window: &ContributionWindow) -> String {
    format!(
        "{} .. {} ({} days)",
        window.from.to_rfc3339_opts(SecondsFormat::Secs, true),
        window.to.to_rfc3339_opts(SecondsFormat::Secs, true),
        window.span_days()
    )
}

/// Human-readable rendering of both windows and the streak's "today".
pub fn format_windows(
    windows: &QueryWindows,
    range: StatsRange,
    today: NaiveDate,
    tz: Tz,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "today: {today} ({})", tz.name());
    let _ = writeln!(
        out,
        "stats ({}): {}",
        range.label(),
        format_window(&windows.stats)
    );
    let _ = writeln!(out, "streak: {}", format_window(&windows.streak));
    out
}
