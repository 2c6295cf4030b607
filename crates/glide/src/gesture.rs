//! Pointer drag tracking for the slide strip.
//!
//! The tracker is a two-state machine (`Idle → Dragging → Idle`). While
//! dragging it turns pointer positions into a clamped preview offset; on
//! release it decides whether the drag commits a step or snaps back.
//!
//! Malformed sequences (move or release without a press, a second press while
//! dragging) are ignored rather than reported.
//!
//! # Usage
//!
//! ```
//! use glide::gesture::{GestureOutcome, GestureTracker, Step};
//! use glide::PointerId;
//!
//! let mut tracker = GestureTracker::new();
//! tracker.press(PointerId(1), 400.0, 800.0);
//! assert_eq!(tracker.drag_to(200.0), Some(-25.0));
//!
//! let (outcome, _sample) = tracker.release().unwrap();
//! assert_eq!(outcome, GestureOutcome::Commit(Step::Forward));
//! ```

use glide_core::logging::targets;

use crate::host::PointerId;

/// Default commit threshold as a fraction of the viewport width.
///
/// A drag must travel strictly further than this to change slides.
pub const DEFAULT_COMMIT_THRESHOLD: f32 = 0.18;

/// Default limit of the drag preview, in percent of the viewport width.
pub const DEFAULT_MAX_PREVIEW_PERCENT: f32 = 100.0;

/// Configuration for the gesture tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Fraction of the viewport width a drag must exceed to commit.
    pub commit_threshold: f32,
    /// Maximum preview offset in either direction, in percent.
    pub max_preview_percent: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            max_preview_percent: DEFAULT_MAX_PREVIEW_PERCENT,
        }
    }
}

/// Direction of a single-slide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// To the next slide.
    Forward,
    /// To the previous slide.
    Backward,
}

impl Step {
    /// Signed index offset of this step.
    pub fn offset(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// The decision taken when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The drag crossed the threshold: move one slide.
    Commit(Step),
    /// The drag stayed within the threshold: snap back.
    Cancel,
}

/// Phase of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is pressed.
    #[default]
    Idle,
    /// A pointer is pressed and being tracked.
    Dragging,
}

/// Positions recorded during an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Pointer that started the drag.
    pub pointer: PointerId,
    /// Horizontal position at press.
    pub start_position: f32,
    /// Latest horizontal position.
    pub current_position: f32,
    /// Viewport width at press.
    pub viewport_width: f32,
}

impl GestureSample {
    /// Horizontal displacement since the press.
    pub fn delta(&self) -> f32 {
        self.current_position - self.start_position
    }

    /// Displacement in percent of the viewport width, clamped to `±max_percent`.
    pub fn percent(&self, max_percent: f32) -> f32 {
        (self.delta() / self.viewport_width * 100.0).clamp(-max_percent, max_percent)
    }

    /// Decide the outcome of releasing the drag here.
    ///
    /// Dragging left (negative delta) advances, dragging right retreats.
    pub fn outcome(&self, commit_threshold: f32) -> GestureOutcome {
        let delta = self.delta();
        let threshold = commit_threshold * self.viewport_width;
        if delta.abs() > threshold {
            if delta < 0.0 {
                GestureOutcome::Commit(Step::Forward)
            } else {
                GestureOutcome::Commit(Step::Backward)
            }
        } else {
            GestureOutcome::Cancel
        }
    }
}

/// Converts pointer press/move/release into previews and decisions.
#[derive(Debug, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    sample: Option<GestureSample>,
}

impl GestureTracker {
    /// Creates a tracker with default configuration.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Creates a tracker with the given configuration.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            sample: None,
        }
    }

    /// The tracker configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        if self.sample.is_some() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.sample.is_some()
    }

    /// The active drag sample.
    pub fn sample(&self) -> Option<&GestureSample> {
        self.sample.as_ref()
    }

    /// Begin a drag. Returns `false` (and changes nothing) when already
    /// dragging or when `viewport_width` is not a positive finite number.
    pub fn press(&mut self, pointer: PointerId, position: f32, viewport_width: f32) -> bool {
        if self.sample.is_some() {
            tracing::trace!(target: targets::GESTURE, ?pointer, "press while dragging ignored");
            return false;
        }
        if !viewport_width.is_finite() || viewport_width <= 0.0 || !position.is_finite() {
            tracing::trace!(
                target: targets::GESTURE,
                viewport_width,
                position,
                "press with unusable geometry ignored"
            );
            return false;
        }

        self.sample = Some(GestureSample {
            pointer,
            start_position: position,
            current_position: position,
            viewport_width,
        });
        tracing::trace!(
            target: targets::GESTURE,
            ?pointer,
            position,
            viewport_width,
            "drag started"
        );
        true
    }

    /// Track the pointer to `position` and return the preview offset in
    /// percent, or `None` when not dragging.
    pub fn drag_to(&mut self, position: f32) -> Option<f32> {
        let max_percent = self.config.max_preview_percent;
        let Some(sample) = self.sample.as_mut() else {
            tracing::trace!(target: targets::GESTURE, position, "move without press ignored");
            return None;
        };
        if position.is_finite() {
            sample.current_position = position;
        }
        let percent = sample.percent(max_percent);
        tracing::trace!(target: targets::GESTURE, delta = sample.delta(), percent, "drag preview");
        Some(percent)
    }

    /// End the drag and return the decision with the final sample, or `None`
    /// when not dragging.
    pub fn release(&mut self) -> Option<(GestureOutcome, GestureSample)> {
        let Some(sample) = self.sample.take() else {
            tracing::trace!(target: targets::GESTURE, "release without press ignored");
            return None;
        };
        let outcome = sample.outcome(self.config.commit_threshold);
        tracing::trace!(
            target: targets::GESTURE,
            delta = sample.delta(),
            ?outcome,
            "drag released"
        );
        Some((outcome, sample))
    }

    /// Drop the drag without a decision (used on teardown).
    pub fn abort(&mut self) -> Option<GestureSample> {
        self.sample.take()
    }
}
