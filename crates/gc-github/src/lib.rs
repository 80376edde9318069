//! GitHub GraphQL integration for ghcards.
//!
//! A single request fetches everything both cards need:
//! - starred repository count
//! - aggregate commit/PR/review/issue counts for the stats window
//! - repositories contributed to by commit, issue and pull request
//! - the per-day contribution calendar for the streak window

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use gc_core::{ContributionSnapshot, ContributionTotals, DayRecord, QueryWindows};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default request timeout for API calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = concat!("ghcards/", env!("CARGO_PKG_VERSION"));

const CONTRIBUTIONS_QUERY: &str = r"
query(
  $login: String!
  $statsFrom: DateTime!
  $statsTo: DateTime!
  $streakFrom: DateTime!
  $streakTo: DateTime!
) {
  user(login: $login) {
    login
    starredRepositories {
      totalCount
    }
    stats: contributionsCollection(from: $statsFrom, to: $statsTo) {
      totalCommitContributions
      totalPullRequestContributions
      totalPullRequestReviewContributions
      totalIssueContributions
      commitContributionsByRepository(maxRepositories: 100) {
        repository { nameWithOwner }
      }
      issueContributionsByRepository(maxRepositories: 100) {
        repository { nameWithOwner }
      }
      pullRequestContributionsByRepository(maxRepositories: 100) {
        repository { nameWithOwner }
      }
    }
    streak: contributionsCollection(from: $streakFrom, to: $streakTo) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}
";

/// GitHub client errors.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The provided token was invalid.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// API returned a non-success status.
    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// GraphQL response carried an `errors` payload.
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    /// The login did not resolve to a user.
    #[error("user not found: {0}")]
    UserNotFound(String),
    /// Failed to parse response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// GitHub GraphQL client.
pub struct Client {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("token", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new client with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or whitespace-only, or if
    /// the HTTP client fails to build.
    pub fn new(token: impl Into<String>) -> Result<Self, GithubError> {
        let token = token.into();

        if token.is_empty() {
            return Err(GithubError::InvalidToken {
                reason: "token cannot be empty",
            });
        }
        if token.trim().is_empty() {
            return Err(GithubError::InvalidToken {
                reason: "token cannot be whitespace-only",
            });
        }

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GithubError::ClientBuild)?;

        Ok(Self {
            http,
            token,
            endpoint: GITHUB_GRAPHQL_URL.to_string(),
        })
    }

    /// Points the client at a different GraphQL endpoint (e.g. GitHub Enterprise).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fetches contribution data for `login` over both windows.
    ///
    /// Any transport failure, non-success status or GraphQL error fails the
    /// whole call; there is no partial result.
    pub async fn fetch_contributions(
        &self,
        login: &str,
        windows: &QueryWindows,
    ) -> Result<ContributionSnapshot, GithubError> {
        let request = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: Variables::new(login, windows),
        };
        tracing::debug!(login, endpoint = %self.endpoint, "querying contributions");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: parse_api_message(&body).unwrap_or(body),
            });
        }

        parse_response(login, &body)
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    login: &'a str,
    stats_from: DateTime<Utc>,
    stats_to: DateTime<Utc>,
    streak_from: DateTime<Utc>,
    streak_to: DateTime<Utc>,
}

impl<'a> Variables<'a> {
    fn new(login: &'a str, windows: &QueryWindows) -> Self {
        Self {
            login,
            stats_from: windows.stats.from,
            stats_to: windows.stats.to,
            streak_from: windows.streak.from,
            streak_to: windows.streak.to,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    login: String,
    starred_repositories: TotalCount,
    stats: StatsCollection,
    streak: StreakCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsCollection {
    total_commit_contributions: u64,
    total_pull_request_contributions: u64,
    total_pull_request_review_contributions: u64,
    total_issue_contributions: u64,
    commit_contributions_by_repository: Vec<RepoContribution>,
    issue_contributions_by_repository: Vec<RepoContribution>,
    pull_request_contributions_by_repository: Vec<RepoContribution>,
}

#[derive(Debug, Deserialize)]
struct RepoContribution {
    repository: RepoRef,
}

#[derive(Debug, Deserialize)]
struct RepoRef {
    #[serde(rename = "nameWithOwner")]
    name_with_owner: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreakCollection {
    contribution_calendar: Calendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Calendar {
    total_contributions: u64,
    weeks: Vec<Week>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    date: NaiveDate,
    contribution_count: u32,
}

fn repo_names(list: Vec<RepoContribution>) -> Vec<String> {
    list.into_iter()
        .map(|c| c.repository.name_with_owner)
        .collect()
}

impl From<UserNode> for ContributionSnapshot {
    fn from(user: UserNode) -> Self {
        let stats = user.stats;
        let calendar = user.streak.contribution_calendar;
        Self {
            login: user.login,
            totals: ContributionTotals {
                stars: user.starred_repositories.total_count,
                commits: stats.total_commit_contributions,
                pull_requests: stats.total_pull_request_contributions,
                reviews: stats.total_pull_request_review_contributions,
                issues: stats.total_issue_contributions,
            },
            commit_repos: repo_names(stats.commit_contributions_by_repository),
            issue_repos: repo_names(stats.issue_contributions_by_repository),
            pull_request_repos: repo_names(stats.pull_request_contributions_by_repository),
            calendar: calendar
                .weeks
                .into_iter()
                .flat_map(|week| week.contribution_days)
                .map(|day| DayRecord::new(day.date, day.contribution_count))
                .collect(),
            calendar_total: calendar.total_contributions,
        }
    }
}

/// Extracts `message` from a REST-style error body such as
/// `{"message":"Bad credentials"}`.
fn parse_api_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorPayload {
        message: String,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|payload| payload.message)
}

fn parse_response(login: &str, body: &str) -> Result<ContributionSnapshot, GithubError> {
    let payload: GraphQlResponse =
        serde_json::from_str(body).map_err(|err| GithubError::InvalidResponse(err.to_string()))?;

    if !payload.errors.is_empty() {
        let messages = payload
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GithubError::GraphQl(messages));
    }

    let data = payload
        .data
        .ok_or_else(|| GithubError::InvalidResponse("missing data".to_string()))?;
    let user = data
        .user
        .ok_or_else(|| GithubError::UserNotFound(login.to_string()))?;

    Ok(user.into())
}
