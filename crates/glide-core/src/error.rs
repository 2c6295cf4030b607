//! Error types for Glide core systems.

use std::fmt;

/// Timer-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    InvalidTimerId,
    /// A repeating timer was requested with a zero interval.
    ZeroInterval,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimerId => write!(f, "Invalid or expired timer ID"),
            Self::ZeroInterval => write!(f, "Repeating timers require a non-zero interval"),
        }
    }
}

impl std::error::Error for TimerError {}

/// A specialized Result type for timer operations.
pub type Result<T> = std::result::Result<T, TimerError>;
