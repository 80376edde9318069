//! Card color themes.
//!
//! The theme set is closed: every name resolves to a [`ThemeName`] and every
//! [`ThemeName`] maps to a `'static` [`Palette`]. Unknown names fall back to
//! [`ThemeName::DefaultLight`].

use std::fmt;

use crate::types::normalize_key;

/// Colors used to draw a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Gradient start.
    pub bg1: &'static str,
    /// Gradient end.
    pub bg2: &'static str,
    pub border: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
    /// Row separators and decoration.
    pub dot: &'static str,
}

/// Canonical theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    DefaultLight,
    Vue,
    AyuLight,
    Swift,
    RosePine,
    RosePineDawn,
    Slate,
    Midnight,
    Sunset,
}

const DEFAULT_LIGHT: Palette = Palette {
    bg1: "#ffffff",
    bg2: "#f8fafc",
    border: "#e5e7eb",
    title: "#0f172a",
    label: "#475569",
    accent: "#2563eb",
    dot: "#e2e8f0",
};

const VUE: Palette = Palette {
    bg1: "#ffffff",
    bg2: "#f2fbf7",
    border: "#d8f3e6",
    title: "#0f3b2e",
    label: "#2b5c45",
    accent: "#41b883",
    dot: "#cce9dd",
};

const AYU_LIGHT: Palette = Palette {
    bg1: "#fffaf5",
    bg2: "#faf3ea",
    border: "#eee4d9",
    title: "#1f2430",
    label: "#6c6f93",
    accent: "#ff9940",
    dot: "#e9ded1",
};

const SWIFT: Palette = Palette {
    bg1: "#fff7fb",
    bg2: "#f5f3ff",
    border: "#eadff7",
    title: "#5b21b6",
    label: "#7c3aed",
    accent: "#a855f7",
    dot: "#e9d5ff",
};

const ROSE_PINE: Palette = Palette {
    bg1: "#fffaf3",
    bg2: "#faf4ed",
    border: "#f2e9e1",
    title: "#575279",
    label: "#797593",
    accent: "#b4637a",
    dot: "#eaddcf",
};

const ROSE_PINE_DAWN: Palette = Palette {
    accent: "#286983",
    ..ROSE_PINE
};

const SLATE: Palette = Palette {
    bg1: "#f8fafc",
    bg2: "#eef2f7",
    border: "#e5e7eb",
    title: "#111827",
    label: "#374151",
    accent: "#0ea5e9",
    dot: "#e2e8f0",
};

const MIDNIGHT: Palette = Palette {
    bg1: "#0f2331",
    bg2: "#0b1622",
    border: "#0b2534",
    title: "#e5f2fb",
    label: "#cbd5e1",
    accent: "#22d3ee",
    dot: "#0f2a3a",
};

const SUNSET: Palette = Palette {
    bg1: "#ffedd5",
    bg2: "#fde2c0",
    border: "#fcd4b2",
    title: "#7c2d12",
    label: "#9a3412",
    accent: "#fb923c",
    dot: "#f6c49d",
};

impl ThemeName {
    pub const ALL: [Self; 9] = [
        Self::DefaultLight,
        Self::Vue,
        Self::AyuLight,
        Self::Swift,
        Self::RosePine,
        Self::RosePineDawn,
        Self::Slate,
        Self::Midnight,
        Self::Sunset,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultLight => "default_light",
            Self::Vue => "vue",
            Self::AyuLight => "ayu_light",
            Self::Swift => "swift",
            Self::RosePine => "rose_pine",
            Self::RosePineDawn => "rose_pine_dawn",
            Self::Slate => "slate",
            Self::Midnight => "midnight",
            Self::Sunset => "sunset",
        }
    }

    /// Alternative names accepted for this theme.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::DefaultLight => &["default", "light"],
            Self::AyuLight => &["ayu"],
            Self::RosePine => &["rosepine"],
            Self::RosePineDawn => &["dawn", "rosepine_dawn"],
            Self::Midnight => &["dark"],
            Self::Vue | Self::Swift | Self::Slate | Self::Sunset => &[],
        }
    }

    #[must_use]
    pub const fn palette(&self) -> &'static Palette {
        match self {
            Self::DefaultLight => &DEFAULT_LIGHT,
            Self::Vue => &VUE,
            Self::AyuLight => &AYU_LIGHT,
            Self::Swift => &SWIFT,
            Self::RosePine => &ROSE_PINE,
            Self::RosePineDawn => &ROSE_PINE_DAWN,
            Self::Slate => &SLATE,
            Self::Midnight => &MIDNIGHT,
            Self::Sunset => &SUNSET,
        }
    }

    /// Looks up a canonical name or alias.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let key = normalize_key(name);
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == key || theme.aliases().contains(&key.as_str()))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a configured theme name, falling back to the default theme.
pub fn resolve_theme(name: &str) -> ThemeName {
    ThemeName::lookup(name).unwrap_or_else(|| {
        tracing::warn!(theme = name, fallback = %ThemeName::default(), "unknown theme");
        ThemeName::default()
    })
}
