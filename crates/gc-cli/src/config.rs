//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Result, bail};
use chrono_tz::Tz;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use gc_core::{NumberStyle, StatsRange, WindowConfig, resolve_theme};
use gc_svg::CardStyle;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accent colors must be `#rgb` or `#rrggbb`.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Unprefixed variables understood for compatibility with the stats Action.
const LEGACY_ENV: [(&str, &str); 5] = [
    ("GH_LOGIN", "login"),
    ("SVG_THEME", "theme"),
    ("ACCENT", "accent"),
    ("NUM_STYLE", "number_style"),
    ("STATS_RANGE", "stats_range"),
];

/// Fallbacks for the login, most specific first.
const LOGIN_FALLBACKS: [&str; 2] = ["GITHUB_REPOSITORY_OWNER", "GITHUB_ACTOR"];

/// Fallbacks for the token. A PAT sees private contributions, so it wins.
const TOKEN_FALLBACKS: [&str; 3] = ["PAT_READ_USER", "GITHUB_TOKEN", "GH_TOKEN"];

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub login whose contributions are rendered.
    pub login: Option<String>,
    /// GitHub token used for the GraphQL API.
    pub token: Option<String>,
    /// Theme name or alias; unknown names fall back to the default theme.
    pub theme: String,
    /// Accent color override (`#rgb` or `#rrggbb`).
    pub accent: Option<String>,
    pub number_style: NumberStyle,
    pub stats_range: StatsRange,
    /// IANA timezone deciding which calendar day is "today".
    pub timezone: Option<String>,
    /// Directory receiving `stats.svg` and `streak.svg`.
    pub output_dir: PathBuf,
    pub card_width: u32,
    /// Length of the streak query window in days.
    pub streak_days: i64,
    /// GraphQL endpoint.
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("login", &self.login)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("theme", &self.theme)
            .field("accent", &self.accent)
            .field("number_style", &self.number_style)
            .field("stats_range", &self.stats_range)
            .field("timezone", &self.timezone)
            .field("output_dir", &self.output_dir)
            .field("card_width", &self.card_width)
            .field("streak_days", &self.streak_days)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login: None,
            token: None,
            theme: "default_light".to_string(),
            accent: None,
            number_style: NumberStyle::default(),
            stats_range: StatsRange::default(),
            timezone: None,
            output_dir: PathBuf::from("assets"),
            card_width: 495,
            streak_days: WindowConfig::default().max_streak_days,
            api_url: "https://api.github.com/graphql".to_string(),
        }
    }
}

/// Login and token, both present and non-empty.
#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Reads a process environment variable, treating blank values as unset.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from Action-style variables (GH_LOGIN, SVG_THEME, ...)
        for (var, field) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| field.into()));
        }

        // Load from environment variables (GHCARDS_*)
        figment = figment.merge(Env::prefixed("GHCARDS_"));

        figment.extract()
    }

    /// Fills unset values from CI-provided variables.
    ///
    /// `lookup` is usually [`process_env`].
    #[must_use]
    pub fn with_ambient(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if non_blank(self.login.as_ref()).is_none() {
            self.login = lookup(LOGIN_FALLBACKS[0])
                .or_else(|| {
                    lookup("GITHUB_REPOSITORY")
                        .and_then(|repo| repo.split('/').next().map(str::to_string))
                        .filter(|owner| !owner.is_empty())
                })
                .or_else(|| lookup(LOGIN_FALLBACKS[1]));
        }

        if non_blank(self.token.as_ref()).is_none() {
            self.token = TOKEN_FALLBACKS.into_iter().find_map(&lookup);
        }

        if non_blank(self.timezone.as_ref()).is_none() {
            self.timezone = Some(ambient_timezone(&lookup));
        }

        self
    }

    /// Login and token for the data source.
    pub fn credentials(&self) -> Result<Credentials> {
        let Some(login) = non_blank(self.login.as_ref()) else {
            bail!("missing GitHub login (set GH_LOGIN, GHCARDS_LOGIN or `login` in config.toml)");
        };
        let Some(token) = non_blank(self.token.as_ref()) else {
            bail!("missing GitHub token (set PAT_READ_USER, GITHUB_TOKEN or GHCARDS_TOKEN)");
        };
        Ok(Credentials {
            login: login.to_string(),
            token: token.to_string(),
        })
    }

    /// The configured timezone, defaulting to UTC when unset.
    pub fn tz(&self) -> Result<Tz> {
        match non_blank(self.timezone.as_ref()) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| anyhow::anyhow!("unknown timezone: {name}")),
            None => Ok(Tz::UTC),
        }
    }

    /// Validated visual options for both cards.
    pub fn card_style(&self) -> Result<CardStyle> {
        let accent = non_blank(self.accent.as_ref());
        if let Some(accent) = accent {
            if !HEX_COLOR_RE.is_match(accent) {
                bail!("invalid accent color: {accent} (expected #rgb or #rrggbb)");
            }
        }
        if self.card_width == 0 {
            bail!("card_width must be greater than zero");
        }

        Ok(CardStyle::new(resolve_theme(&self.theme))
            .with_width(f64::from(self.card_width))
            .with_accent(accent)
            .with_number_style(self.number_style))
    }

    /// Window limits, with the configured streak length.
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            max_streak_days: self.streak_days,
            ..WindowConfig::default()
        }
    }
}

/// `TZ` if it names an IANA zone, else the system zone, else UTC.
fn ambient_timezone(lookup: &impl Fn(&str) -> Option<String>) -> String {
    if let Some(tz) = lookup("TZ") {
        if tz.parse::<Tz>().is_ok() {
            return tz;
        }
        tracing::warn!(tz, "ignoring TZ that is not an IANA timezone name");
    }

    iana_time_zone::get_timezone()
        .ok()
        .filter(|name| name.parse::<Tz>().is_ok())
        .unwrap_or_else(|| "UTC".to_string())
}

/// Returns the platform-specific config directory for ghcards.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ghcards"))
}
