//! An in-process host surface.
//!
//! [`HeadlessSurface`] keeps the visible model of a slider (strip offset,
//! active slides, pagination, live-region text, pointer capture) in memory,
//! records every command it receives, and runs timers on a clock that only
//! moves when [`advance`](HeadlessSurface::advance) is called. It backs the
//! test suite and the demo, and suits embedders that render from a snapshot.
//!
//! The command log grows with every host call. Long-running embedders should
//! turn it off with [`with_command_log(false)`](HeadlessSurface::with_command_log);
//! the visible model is kept either way.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use glide_core::logging::targets;
use glide_core::{TimerId, TimerQueue};

use crate::host::{HostError, HostOperation, HostResult, HostSurface, PointerId};

/// A command received by a [`HeadlessSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// `apply_transform`.
    Transform(f32),
    /// `set_slide_active`.
    SlideActive { index: usize, active: bool },
    /// `create_indicator`.
    IndicatorCreated { index: usize, label: String },
    /// `set_indicator_selected`.
    IndicatorSelected { index: usize, selected: bool },
    /// `set_announcement_text`.
    Announcement(String),
    /// `schedule_recurring`.
    Scheduled { handle: TimerId, interval: Duration },
    /// `cancel`.
    Cancelled(TimerId),
    /// `capture_pointer`.
    PointerCaptured(PointerId),
    /// `release_pointer`.
    PointerReleased(PointerId),
}

/// A pagination indicator as rendered by the headless surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Accessible label.
    pub label: String,
    /// Whether the indicator is marked selected.
    pub selected: bool,
}

/// A host surface that renders into memory.
#[derive(Debug)]
pub struct HeadlessSurface {
    clock: Instant,
    timers: TimerQueue,
    commands: Vec<SurfaceCommand>,
    record_commands: bool,
    transform: f32,
    active_slides: Vec<bool>,
    indicators: Vec<Indicator>,
    announcement: String,
    captured: Option<PointerId>,
    failing: HashSet<HostOperation>,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    /// Create an empty surface whose clock starts now.
    pub fn new() -> Self {
        Self {
            clock: Instant::now(),
            timers: TimerQueue::new(),
            commands: Vec::new(),
            record_commands: true,
            transform: 0.0,
            active_slides: Vec::new(),
            indicators: Vec::new(),
            announcement: String::new(),
            captured: None,
            failing: HashSet::new(),
        }
    }

    /// Enable or disable the command log using builder pattern.
    pub fn with_command_log(mut self, enabled: bool) -> Self {
        self.record_commands = enabled;
        if !enabled {
            self.commands = Vec::new();
        }
        self
    }

    fn record(&mut self, command: SurfaceCommand) {
        if self.record_commands {
            self.commands.push(command);
        }
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Move the clock forward and return the timers that fired, in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.clock += by;
        self.timers.process_expired(self.clock)
    }

    /// Time until the next live timer fires.
    pub fn time_until_next_timer(&mut self) -> Option<Duration> {
        self.timers.time_until_next(self.clock)
    }

    /// Number of live timers.
    pub fn live_timers(&self) -> usize {
        self.timers.active_count()
    }

    /// Whether the timer is still live.
    pub fn is_timer_live(&self, handle: TimerId) -> bool {
        self.timers.is_active(handle)
    }

    // =========================================================================
    // Visible model
    // =========================================================================

    /// Current strip offset in percent.
    pub fn transform(&self) -> f32 {
        self.transform
    }

    /// Indices of slides currently marked active.
    pub fn active_slides(&self) -> Vec<usize> {
        marked(self.active_slides.iter().copied())
    }

    /// All indicators in creation order.
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Indices of indicators currently marked selected.
    pub fn selected_indicators(&self) -> Vec<usize> {
        marked(self.indicators.iter().map(|i| i.selected))
    }

    /// Current live-region text.
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Every announcement received, oldest first. Empty when the command log
    /// is disabled.
    pub fn announcements(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Announcement(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The pointer currently captured, if any.
    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured
    }

    // =========================================================================
    // Command log
    // =========================================================================

    /// Every command received since creation or the last [`clear_commands`](Self::clear_commands).
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Forget recorded commands. The visible model is kept.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded `schedule_recurring` commands.
    pub fn schedule_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Scheduled { .. }))
            .count()
    }

    // =========================================================================
    // Failure injection
    // =========================================================================

    /// Make every subsequent call of `operation` fail.
    pub fn fail_operation(&mut self, operation: HostOperation) {
        self.failing.insert(operation);
    }

    /// Undo [`fail_operation`](Self::fail_operation).
    pub fn restore_operation(&mut self, operation: HostOperation) {
        self.failing.remove(&operation);
    }

    fn check(&self, operation: HostOperation) -> HostResult<()> {
        if self.failing.contains(&operation) {
            tracing::warn!(target: targets::HOST, %operation, "injected host failure");
            return Err(HostError::new(operation, "injected failure"));
        }
        Ok(())
    }
}

fn marked(flags: impl Iterator<Item = bool>) -> Vec<usize> {
    flags
        .enumerate()
        .filter_map(|(index, on)| on.then_some(index))
        .collect()
}

impl HostSurface for HeadlessSurface {
    fn apply_transform(&mut self, percent_offset: f32) -> HostResult<()> {
        self.check(HostOperation::ApplyTransform)?;
        self.transform = percent_offset;
        self.record(SurfaceCommand::Transform(percent_offset));
        Ok(())
    }

    fn set_slide_active(&mut self, index: usize, active: bool) -> HostResult<()> {
        self.check(HostOperation::SetSlideActive)?;
        if self.active_slides.len() <= index {
            self.active_slides.resize(index + 1, false);
        }
        self.active_slides[index] = active;
        self.record(SurfaceCommand::SlideActive { index, active });
        Ok(())
    }

    fn create_indicator(&mut self, index: usize, label: &str) -> HostResult<()> {
        self.check(HostOperation::CreateIndicator)?;
        if index != self.indicators.len() {
            return Err(HostError::new(
                HostOperation::CreateIndicator,
                format!(
                    "indicators must be created in order (expected {}, got {index})",
                    self.indicators.len()
                ),
            ));
        }
        self.indicators.push(Indicator {
            label: label.to_string(),
            selected: false,
        });
        self.record(SurfaceCommand::IndicatorCreated {
            index,
            label: label.to_string(),
        });
        Ok(())
    }

    fn set_indicator_selected(&mut self, index: usize, selected: bool) -> HostResult<()> {
        self.check(HostOperation::SetIndicatorSelected)?;
        let Some(indicator) = self.indicators.get_mut(index) else {
            return Err(HostError::new(
                HostOperation::SetIndicatorSelected,
                format!("no indicator at index {index}"),
            ));
        };
        indicator.selected = selected;
        self.record(SurfaceCommand::IndicatorSelected { index, selected });
        Ok(())
    }

    fn set_announcement_text(&mut self, text: &str) -> HostResult<()> {
        self.check(HostOperation::SetAnnouncementText)?;
        self.announcement = text.to_string();
        self.record(SurfaceCommand::Announcement(text.to_string()));
        Ok(())
    }

    fn schedule_recurring(&mut self, interval: Duration) -> HostResult<TimerId> {
        self.check(HostOperation::ScheduleRecurring)?;
        let handle = self
            .timers
            .start_repeating(self.clock, interval)
            .map_err(|err| HostError::new(HostOperation::ScheduleRecurring, err.to_string()))?;
        self.record(SurfaceCommand::Scheduled { handle, interval });
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerId) -> HostResult<()> {
        self.check(HostOperation::Cancel)?;
        self.timers
            .stop(handle)
            .map_err(|err| HostError::new(HostOperation::Cancel, err.to_string()))?;
        self.record(SurfaceCommand::Cancelled(handle));
        Ok(())
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> HostResult<()> {
        self.check(HostOperation::CapturePointer)?;
        self.captured = Some(pointer);
        self.record(SurfaceCommand::PointerCaptured(pointer));
        Ok(())
    }

    fn release_pointer(&mut self, pointer: PointerId) -> HostResult<()> {
        self.check(HostOperation::ReleasePointer)?;
        if self.captured == Some(pointer) {
            self.captured = None;
        }
        self.record(SurfaceCommand::PointerReleased(pointer));
        Ok(())
    }

    fn now(&self) -> Instant {
        self.clock
    }
}

static_assertions::assert_impl_all!(HeadlessSurface: Send, Sync);
