//! Contracts of the page collaborators that share a host with the slider.
//!
//! The slider does not read either of these. They are the minimal interfaces
//! the theme switcher and the decorative backgrounds expose to each other.

use std::fmt;
use std::str::FromStr;

/// Colour theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Dark theme.
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// The persisted name of the theme.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a persisted theme name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Source of the current page theme.
pub trait ThemeSource {
    /// The theme currently applied.
    fn current_theme(&self) -> Theme;
}

/// The shared "reduced motion" preference read by decorative render loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    /// Full motion.
    pub fn full() -> Self {
        Self { reduced: false }
    }

    /// Reduced motion.
    pub fn reduced() -> Self {
        Self { reduced: true }
    }

    /// Whether decorative animation should be reduced to static frames.
    pub fn is_reduced(self) -> bool {
        self.reduced
    }
}
