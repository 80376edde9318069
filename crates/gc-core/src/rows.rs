//! Card row assembly.
//!
//! Turns finalized integers into labelled, display-ready rows. Nothing
//! downstream of this module does arithmetic.

use crate::types::{ContributionTotals, Row, StatsRange, StreakResult};

/// Formats `n` with en-US thousands separators (`1234567` → `1,234,567`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn stats_title(login: &str, range: StatsRange) -> String {
    format!("{login}'s GitHub Stats ({})", range.label())
}

pub fn streak_title(login: &str) -> String {
    format!("{login}'s Contribution Streak")
}

/// Rows for the stats card.
pub fn stats_rows(totals: &ContributionTotals, repo_count: usize) -> Vec<Row> {
    vec![
        Row::new("Starred Repos", format_count(totals.stars)),
        Row::new("Total Commits", format_count(totals.commits)),
        Row::new("Total PRs", format_count(totals.pull_requests)),
        Row::new("Total PR Reviews", format_count(totals.reviews)),
        Row::new("Total Issues", format_count(totals.issues)),
        Row::new("Contributed To", format_count(repo_count as u64)),
    ]
}

/// Rows for the streak card.
///
/// `contributions` is the total over the same calendar the streaks were
/// computed from.
pub fn streak_rows(streak: &StreakResult, contributions: u64) -> Vec<Row> {
    vec![
        Row::new("Current Streak", days(streak.current)),
        Row::new("Longest Streak", days(streak.longest)),
        Row::new("Contributions", format_count(contributions)),
    ]
}

fn days(n: u32) -> String {
    let unit = if n == 1 { "day" } else { "days" };
    format!("{} {unit}", format_count(u64::from(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn render(rows: &[Row]) -> String {
        rows.iter()
            .map(|row| format!("{}: {}", row.label, row.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn titles_include_login_and_range() {
        assert_eq!(
            stats_title("octocat", StatsRange::AllTime),
            "octocat's GitHub Stats (all time)"
        );
        assert_eq!(streak_title("octocat"), "octocat's Contribution Streak");
    }

    #[test]
    fn stats_rows_are_formatted() {
        let totals = ContributionTotals {
            stars: 42,
            commits: 12_804,
            pull_requests: 311,
            reviews: 1_002,
            issues: 7,
        };
        assert_snapshot!(render(&stats_rows(&totals, 19)), @r"
        Starred Repos: 42
        Total Commits: 12,804
        Total PRs: 311
        Total PR Reviews: 1,002
        Total Issues: 7
        Contributed To: 19
        ");
    }

    #[test]
    fn streak_rows_pluralize_days() {
        let streak = StreakResult {
            current: 1,
            longest: 1_204,
        };
        assert_snapshot!(render(&streak_rows(&streak, 5_310)), @r"
        Current Streak: 1 day
        Longest Streak: 1,204 days
        Contributions: 5,310
        ");
    }

    #[test]
    fn zero_streak_reads_zero_days() {
        let rows = streak_rows(&StreakResult::default(), 0);
        assert_eq!(rows[0], Row::new("Current Streak", "0 days"));
        assert_eq!(rows[2], Row::new("Contributions", "0"));
    }
}
