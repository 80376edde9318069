//! Generate the stats and streak cards.
//!
//! Windows are validated before any request is sent. Both cards are written
//! through temp files and only renamed into place once both renders exist.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use gc_core::rows::{stats_rows, stats_title, streak_rows, streak_title};
use gc_core::{
    ContributionSnapshot, StatsRange, calendar_total, compute_streaks, dedupe_repos,
    prepare_calendar, query_windows, today_in,
};
use gc_github::Client;
use gc_svg::{CardStyle, render_card};

use crate::Config;

pub const STATS_FILE: &str = "stats.svg";
pub const STREAK_FILE: &str = "streak.svg";

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// GitHub login to render (overrides config and environment).
    #[arg(long)]
    pub login: Option<String>,

    /// Stats range (`last_year`, `this_year`, `all_time`).
    #[arg(long)]
    pub range: Option<StatsRange>,

    /// Theme name or alias.
    #[arg(long)]
    pub theme: Option<String>,

    /// Directory to write the cards into.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// Applies command-line overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(login) = &self.login {
            config.login = Some(login.clone());
        }
        if let Some(range) = self.range {
            config.stats_range = range;
        }
        if let Some(theme) = &self.theme {
            config.theme.clone_from(theme);
        }
        if let Some(out_dir) = &self.out_dir {
            config.output_dir.clone_from(out_dir);
        }
        config
    }
}

/// Rendered SVG documents for both cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cards {
    pub stats: String,
    pub streak: String,
}

pub fn run<W: Write>(writer: &mut W, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let credentials = config.credentials()?;
    let style = config.card_style()?;
    let tz = config.tz()?;
    let windows = query_windows(now, config.stats_range, &config.window_config())
        .context("invalid query window")?;
    tracing::debug!(?windows, %tz, "derived query windows");

    let client = Client::new(credentials.token)
        .context("failed to create GitHub client")?
        .with_endpoint(config.api_url.clone());
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    let snapshot = runtime
        .block_on(client.fetch_contributions(&credentials.login, &windows))
        .with_context(|| format!("failed to fetch contributions for {}", credentials.login))?;

    let cards = build_cards(&snapshot, config.stats_range, &style, today_in(now, tz));
    for path in write_cards(&config.output_dir, &cards)? {
        writeln!(writer, "wrote {}", path.display())?;
    }
    Ok(())
}

/// Computes every row from `snapshot` and renders both cards.
pub fn build_cards(
    snapshot: &ContributionSnapshot,
    range: StatsRange,
    style: &CardStyle,
    today: NaiveDate,
) -> Cards {
    let calendar = prepare_calendar(&snapshot.calendar, today);
    let streak = compute_streaks(&calendar, today);
    let contributions = calendar_total(&calendar);
    if contributions != snapshot.calendar_total {
        tracing::debug!(
            reported = snapshot.calendar_total,
            counted = contributions,
            "calendar total differs after dropping future days"
        );
    }
    let repo_count = dedupe_repos(
        &snapshot.commit_repos,
        &snapshot.issue_repos,
        &snapshot.pull_request_repos,
    );
    tracing::info!(
        login = %snapshot.login,
        %today,
        current = streak.current,
        longest = streak.longest,
        repos = repo_count,
        "computed card values"
    );

    Cards {
        stats: render_card(
            &stats_title(&snapshot.login, range),
            &stats_rows(&snapshot.totals, repo_count),
            style,
        ),
        streak: render_card(
            &streak_title(&snapshot.login),
            &streak_rows(&streak, contributions),
            style,
        ),
    }
}

/// Writes both cards into `dir`, returning the final paths.
///
/// Both temp files are written before either is renamed, so a failed temp
/// write leaves any previous cards untouched. The renames are not atomic as a
/// pair: if the second rename fails, a new `stats.svg` sits next to the old
/// `streak.svg`.
pub fn write_cards(dir: &Path, cards: &Cards) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let outputs = [(STATS_FILE, &cards.stats), (STREAK_FILE, &cards.streak)];
    let mut staged = Vec::with_capacity(outputs.len());

    for (name, content) in outputs {
        let path = dir.join(name);
        let tmp_path = path.with_extension("svg.tmp");
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            for (tmp, _) in &staged {
                let _ = fs::remove_file(tmp);
            }
            return Err(e).with_context(|| format!("failed to write {}", tmp_path.display()));
        }
        staged.push((tmp_path, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (tmp_path, path) in staged {
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| {
                format!("failed to rename {} to {}", tmp_path.display(), path.display())
            });
        }
        tracing::debug!(path = %path.display(), "wrote card");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use gc_core::{ContributionTotals, DayRecord, ThemeName};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> ContributionSnapshot {
        ContributionSnapshot {
            login: "octocat".to_string(),
            totals: ContributionTotals {
                stars: 1234,
                commits: 812,
                pull_requests: 57,
                reviews: 9,
                issues: 14,
            },
            commit_repos: vec!["octocat/hello".to_string(), "octocat/spoon".to_string()],
            issue_repos: vec!["octocat/hello".to_string()],
            pull_request_repos: vec!["rust-lang/rust".to_string()],
            calendar: vec![
                DayRecord::new(date(2026, 10, 10), 1),
                DayRecord::new(date(2026, 10, 11), 4),
                DayRecord::new(date(2026, 10, 12), 2),
                DayRecord::new(date(2026, 10, 17), 0),
                DayRecord::new(date(2026, 10, 18), 2),
                DayRecord::new(date(2026, 10, 19), 1),
                DayRecord::new(date(2026, 10, 20), 7),
            ],
            calendar_total: 17,
        }
    }

    fn configured() -> Config {
        Config {
            login: Some("octocat".to_string()),
            token: Some("ghp_test".to_string()),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn stats_card_has_totals_and_deduplicated_repos() {
        let style = CardStyle::new(ThemeName::DefaultLight);
        let cards = build_cards(&snapshot(), StatsRange::LastYear, &style, date(2026, 10, 19));

        assert!(cards.stats.contains("octocat&#39;s GitHub Stats (last year)"));
        assert!(cards.stats.contains(">1,234</text>"));
        assert!(cards.stats.contains(">812</text>"));
        assert!(cards.stats.contains(">Contributed To</text>"));
        assert!(cards.stats.contains(">3</text>"));
    }

    #[test]
    fn streak_card_ignores_days_after_today() {
        let style = CardStyle::new(ThemeName::DefaultLight);
        let cards = build_cards(&snapshot(), StatsRange::LastYear, &style, date(2026, 10, 19));

        assert!(cards.streak.contains("octocat&#39;s Contribution Streak"));
        // 10-18 and 10-19; the 10-20 entry is in the future
        assert!(cards.streak.contains(">2 days</text>"));
        assert!(cards.streak.contains(">3 days</text>"));
        // 17 reported, minus the 7 on 10-20
        assert!(cards.streak.contains(">10</text>"));
        assert!(!cards.streak.contains(">17</text>"));
    }

    #[test]
    fn streak_card_is_zero_when_today_is_empty() {
        let mut snapshot = snapshot();
        snapshot.calendar.retain(|day| day.date < date(2026, 10, 19));
        let style = CardStyle::new(ThemeName::DefaultLight);
        let cards = build_cards(&snapshot, StatsRange::LastYear, &style, date(2026, 10, 19));

        assert!(cards.streak.contains(">0 days</text>"));
    }

    #[test]
    fn write_cards_creates_both_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("assets");
        let cards = Cards {
            stats: "<svg>stats</svg>\n".to_string(),
            streak: "<svg>streak</svg>\n".to_string(),
        };

        let written = write_cards(&dir, &cards).unwrap();

        assert_eq!(written, vec![dir.join(STATS_FILE), dir.join(STREAK_FILE)]);
        assert_eq!(fs::read_to_string(dir.join(STATS_FILE)).unwrap(), cards.stats);
        assert_eq!(fs::read_to_string(dir.join(STREAK_FILE)).unwrap(), cards.streak);
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn write_cards_replaces_existing_cards() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATS_FILE), "old").unwrap();
        let cards = Cards {
            stats: "new stats".to_string(),
            streak: "new streak".to_string(),
        };

        write_cards(temp.path(), &cards).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join(STATS_FILE)).unwrap(),
            "new stats"
        );
    }

    #[test]
    fn failed_temp_write_keeps_previous_cards() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(STATS_FILE), "old stats").unwrap();
        fs::write(temp.path().join(STREAK_FILE), "old streak").unwrap();
        // A directory in the way makes the second temp write fail
        fs::create_dir(temp.path().join("streak.svg.tmp")).unwrap();
        let cards = Cards {
            stats: "new stats".to_string(),
            streak: "new streak".to_string(),
        };

        let err = write_cards(temp.path(), &cards).unwrap_err();

        assert!(err.to_string().contains("failed to write"));
        assert!(!temp.path().join("stats.svg.tmp").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join(STATS_FILE)).unwrap(),
            "old stats"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join(STREAK_FILE)).unwrap(),
            "old streak"
        );
    }

    #[test]
    fn run_requires_credentials() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            output_dir: temp.path().to_path_buf(),
            ..Config::default()
        };
        let mut out = Vec::new();
        let err = run(&mut out, &config, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("missing GitHub login"));
    }

    #[test]
    fn run_rejects_bad_accent_before_fetching() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            accent: Some("blue".to_string()),
            output_dir: temp.path().join("cards"),
            ..configured()
        };
        let mut out = Vec::new();
        let err = run(&mut out, &config, Utc::now()).unwrap_err();
        assert!(err.to_string().contains("invalid accent color"));
        assert!(!temp.path().join("cards").exists());
    }

    #[test]
    fn run_fails_on_oversized_window_before_fetching() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            streak_days: 400,
            output_dir: temp.path().join("cards"),
            ..configured()
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let mut out = Vec::new();
        let err = run(&mut out, &config, now).unwrap_err();
        assert!(format!("{err:#}").contains("exceeding the 365-day ceiling"));
        assert!(!temp.path().join("cards").exists());
    }

    #[test]
    fn args_override_config() {
        let args = GenerateArgs {
            login: Some("monalisa".to_string()),
            range: Some(StatsRange::AllTime),
            theme: Some("rose_pine".to_string()),
            out_dir: Some(PathBuf::from("out")),
        };
        let config = args.apply(configured());
        assert_eq!(config.login.as_deref(), Some("monalisa"));
        assert_eq!(config.stats_range, StatsRange::AllTime);
        assert_eq!(config.theme, "rose_pine");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.token.as_deref(), Some("ghp_test"));
    }

    #[test]
    fn empty_args_keep_config() {
        let config = GenerateArgs::default().apply(configured());
        assert_eq!(config.login.as_deref(), Some("octocat"));
        assert_eq!(config.stats_range, StatsRange::LastYear);
    }
}
