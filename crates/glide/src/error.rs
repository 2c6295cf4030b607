//! Error types for the carousel engine.

use crate::host::HostError;

/// Result type alias for slider operations.
pub type Result<T> = std::result::Result<T, SliderError>;

/// Errors that can occur while driving a slider.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    /// The slider was built over an empty slide set.
    #[error("Slider has no slides")]
    NoSlides,

    /// The controller was used after `dispose()`.
    #[error("Slider controller has been disposed")]
    Disposed,

    /// A pagination click referenced an indicator that does not exist.
    #[error("Indicator {index} is out of range for {count} slides")]
    IndicatorOutOfRange { index: usize, count: usize },

    /// A configuration value is outside its valid range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// Configuration text could not be parsed.
    #[error("Failed to parse slider configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The host surface rejected a command.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl SliderError {
    /// Create a configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if the error originated in the host surface.
    pub fn is_host_failure(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}
