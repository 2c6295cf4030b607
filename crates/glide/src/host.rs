//! The host surface abstraction.
//!
//! The carousel engine never touches a rendering API directly. Every visible
//! effect is issued as an imperative command to a [`HostSurface`], which a
//! host environment implements on top of whatever it renders with.
//!
//! All commands are idempotent: issuing the same command twice leaves the
//! surface in the same state as issuing it once. The controller relies on
//! this to repair a partially failed transition by re-issuing it.

use std::fmt;
use std::time::{Duration, Instant};

use glide_core::TimerId;

/// Result type alias for host surface commands.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Identifies a pointer (mouse, pen or touch contact) reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// The host surface operations, used to attribute failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOperation {
    /// Positioning the slide strip.
    ApplyTransform,
    /// Toggling a slide's active marker.
    SetSlideActive,
    /// Creating a pagination indicator.
    CreateIndicator,
    /// Toggling a pagination indicator's selected marker.
    SetIndicatorSelected,
    /// Replacing the live-region text.
    SetAnnouncementText,
    /// Scheduling a recurring timer.
    ScheduleRecurring,
    /// Cancelling a timer.
    Cancel,
    /// Capturing a pointer to the slider viewport.
    CapturePointer,
    /// Releasing a captured pointer.
    ReleasePointer,
}

impl fmt::Display for HostOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ApplyTransform => "apply transform",
            Self::SetSlideActive => "set slide active",
            Self::CreateIndicator => "create indicator",
            Self::SetIndicatorSelected => "set indicator selected",
            Self::SetAnnouncementText => "set announcement text",
            Self::ScheduleRecurring => "schedule recurring timer",
            Self::Cancel => "cancel timer",
            Self::CapturePointer => "capture pointer",
            Self::ReleasePointer => "release pointer",
        };
        f.write_str(name)
    }
}

/// A command rejected by the host surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Host surface failed to {operation}: {message}")]
pub struct HostError {
    /// The operation that failed.
    pub operation: HostOperation,
    /// Host-provided detail.
    pub message: String,
}

impl HostError {
    /// Create a host error for `operation`.
    pub fn new(operation: HostOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// The environment a slider controller issues commands to.
///
/// Timers are not callbacks: the host returns a [`TimerId`] from
/// [`schedule_recurring`](Self::schedule_recurring) and, each time that timer
/// fires, delivers `SliderCommand::TimerFired(id)` back to the controller
/// through the same entry point as every other input.
pub trait HostSurface {
    /// Position the slide strip at `percent_offset` percent of the viewport
    /// width (negative values move the strip left).
    fn apply_transform(&mut self, percent_offset: f32) -> HostResult<()>;

    /// Mark the slide at `index` active or inactive.
    fn set_slide_active(&mut self, index: usize, active: bool) -> HostResult<()>;

    /// Create the pagination indicator for slide `index`.
    fn create_indicator(&mut self, index: usize, label: &str) -> HostResult<()>;

    /// Mark the pagination indicator at `index` selected or not selected.
    fn set_indicator_selected(&mut self, index: usize, selected: bool) -> HostResult<()>;

    /// Replace the live-region text read by assistive technology.
    fn set_announcement_text(&mut self, text: &str) -> HostResult<()>;

    /// Schedule a recurring timer firing every `interval`.
    fn schedule_recurring(&mut self, interval: Duration) -> HostResult<TimerId>;

    /// Cancel a timer previously returned by `schedule_recurring`.
    fn cancel(&mut self, handle: TimerId) -> HostResult<()>;

    /// Route all further events of `pointer` to the slider viewport.
    fn capture_pointer(&mut self, _pointer: PointerId) -> HostResult<()> {
        Ok(())
    }

    /// Undo [`capture_pointer`](Self::capture_pointer).
    fn release_pointer(&mut self, _pointer: PointerId) -> HostResult<()> {
        Ok(())
    }

    /// Current time, for decorative collaborators sharing the host.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
