//! Core systems for Glide.
//!
//! This crate provides the small set of runtime primitives the carousel engine
//! is built on:
//!
//! - **Signal/Slot System**: Type-safe observer notifications
//! - **Timers**: Repeating timers on an explicit clock
//! - **Logging**: `tracing` targets for filtering by subsystem
//!
//! # Timer Example
//!
//! ```
//! use glide_core::TimerQueue;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut timers = TimerQueue::new();
//! let id = timers.start_repeating(start, Duration::from_millis(500)).unwrap();
//!
//! let fired = timers.process_expired(start + Duration::from_secs(1));
//! assert_eq!(fired, vec![id, id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{Result, TimerError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{TimerId, TimerQueue};
