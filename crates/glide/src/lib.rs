//! Glide: a host-agnostic carousel interaction engine.
//!
//! Glide owns the behaviour of a slide carousel and nothing else: the
//! committed slide index, autoplay, pointer drags, arrow-key navigation,
//! pagination indicators and screen-reader announcements. Rendering, timers
//! and pointer capture belong to a [`HostSurface`] the embedder implements.
//!
//! # Architecture
//!
//! - [`SliderController`] is the single writer of slider state. All input
//!   arrives as a [`SliderCommand`] through
//!   [`dispatch`](SliderController::dispatch).
//! - Timers are handles, not callbacks. The host returns a
//!   [`TimerId`](glide_core::TimerId) from `schedule_recurring` and delivers
//!   [`SliderCommand::TimerFired`] when it fires.
//! - [`HeadlessSurface`] is an in-memory host with a manual clock, used by
//!   tests and simulations.
//! - [`SharedSliderController`] serializes commands from several threads.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use glide::{HeadlessSurface, PointerId, SlideSet, SliderCommand, SliderConfig, SliderController};
//!
//! let mut slider =
//!     SliderController::new(SlideSet::untitled(3), SliderConfig::default(), HeadlessSurface::new())
//!         .unwrap();
//!
//! // One autoplay interval later the slider has advanced.
//! slider.advance_clock(Duration::from_millis(5200)).unwrap();
//! assert_eq!(slider.index(), 1);
//!
//! // Drag right by 30% of the viewport: back to the first slide.
//! slider
//!     .dispatch(SliderCommand::PointerDown { pointer: PointerId(1), position: 100.0, viewport_width: 1000.0 })
//!     .unwrap();
//! slider.dispatch(SliderCommand::DragTo { position: 400.0 }).unwrap();
//! slider.dispatch(SliderCommand::PointerUp).unwrap();
//! assert_eq!(slider.index(), 0);
//! ```

pub mod announcer;
pub mod autoplay;
pub mod collaborators;
mod command;
mod config;
mod controller;
mod error;
pub mod gesture;
pub mod headless;
mod host;
pub mod keyboard;
pub mod pagination;
mod shared;
mod slide;
pub mod state;

pub use command::SliderCommand;
pub use config::SliderConfig;
pub use controller::SliderController;
pub use error::{Result, SliderError};
pub use headless::HeadlessSurface;
pub use host::{HostError, HostOperation, HostResult, HostSurface, PointerId};
pub use keyboard::Key;
pub use shared::SharedSliderController;
pub use slide::{Slide, SlideSet};
pub use state::SliderState;

pub use glide_core::{Signal, TimerId};
