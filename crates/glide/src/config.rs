//! Slider configuration.
//!
//! Configuration can be built in code with the `with_*` builders or loaded
//! from TOML:
//!
//! ```
//! use glide::SliderConfig;
//!
//! let config = SliderConfig::from_toml_str(r#"
//!     autoplay_interval_ms = 8000
//!     commit_threshold = 0.25
//! "#).unwrap();
//!
//! assert_eq!(config.autoplay_interval_ms, 8000);
//! assert!(config.autoplay);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::autoplay::DEFAULT_AUTOPLAY_INTERVAL_MS;
use crate::error::{Result, SliderError};
use crate::gesture::{DEFAULT_COMMIT_THRESHOLD, DEFAULT_MAX_PREVIEW_PERCENT, GestureConfig};

/// Configuration for a slider controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Whether the slider advances on its own.
    pub autoplay: bool,
    /// Interval between automatic advances, in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Fraction of the viewport width a drag must exceed to change slides.
    pub commit_threshold: f32,
    /// Maximum drag preview offset, in percent of the viewport width.
    pub max_preview_percent: f32,
    /// Slide shown after construction (wrapped into range).
    pub initial_index: usize,
    /// Whether the initial slide is announced.
    pub announce_initial: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            max_preview_percent: DEFAULT_MAX_PREVIEW_PERCENT,
            initial_index: 0,
            announce_initial: true,
        }
    }
}

impl SliderConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.autoplay && self.autoplay_interval_ms == 0 {
            return Err(SliderError::invalid_config(
                "autoplay_interval_ms",
                "must be greater than zero when autoplay is enabled",
            ));
        }
        if !(self.commit_threshold.is_finite()
            && self.commit_threshold > 0.0
            && self.commit_threshold <= 1.0)
        {
            return Err(SliderError::invalid_config(
                "commit_threshold",
                format!("must be in (0, 1], got {}", self.commit_threshold),
            ));
        }
        if !(self.max_preview_percent.is_finite() && self.max_preview_percent > 0.0) {
            return Err(SliderError::invalid_config(
                "max_preview_percent",
                format!("must be positive, got {}", self.max_preview_percent),
            ));
        }
        Ok(())
    }

    /// Autoplay interval as a `Duration`.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    /// Gesture settings derived from this configuration.
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            commit_threshold: self.commit_threshold,
            max_preview_percent: self.max_preview_percent,
        }
    }

    /// Enable or disable autoplay using builder pattern.
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set the autoplay interval using builder pattern.
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = interval.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Set the commit threshold using builder pattern.
    pub fn with_commit_threshold(mut self, threshold: f32) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Set the maximum preview offset using builder pattern.
    pub fn with_max_preview_percent(mut self, percent: f32) -> Self {
        self.max_preview_percent = percent;
        self
    }

    /// Set the initial slide using builder pattern.
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    /// Set whether the initial slide is announced using builder pattern.
    pub fn with_announce_initial(mut self, announce: bool) -> Self {
        self.announce_initial = announce;
        self
    }
}
