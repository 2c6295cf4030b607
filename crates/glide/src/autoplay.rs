//! Autoplay scheduling.
//!
//! The scheduler owns at most one recurring timer on the host. `start()`
//! always cancels the previous timer before scheduling a new one, so any
//! interaction that restarts autoplay also resets the idle countdown.

use std::time::Duration;

use glide_core::TimerId;
use glide_core::logging::targets;

use crate::host::{HostResult, HostSurface};

/// Default interval between automatic advances, in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5200;

/// Periodic advance scheduler.
#[derive(Debug)]
pub struct AutoplayScheduler {
    interval: Duration,
    enabled: bool,
    handle: Option<TimerId>,
    starts: u64,
}

impl Default for AutoplayScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS))
    }
}

impl AutoplayScheduler {
    /// Create an enabled scheduler with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            enabled: true,
            handle: None,
            starts: 0,
        }
    }

    /// Enable or disable scheduling using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// (Re)start the recurring timer.
    ///
    /// Returns `Ok(false)` without touching the host when autoplay is disabled
    /// or there is nothing to advance to (`slide_count <= 1`). If cancelling
    /// the previous timer fails, no new timer is scheduled.
    pub fn start<H: HostSurface>(&mut self, host: &mut H, slide_count: usize) -> HostResult<bool> {
        if !self.enabled || slide_count <= 1 {
            tracing::trace!(
                target: targets::AUTOPLAY,
                enabled = self.enabled,
                slide_count,
                "autoplay start skipped"
            );
            return Ok(false);
        }

        self.stop(host)?;
        let handle = host.schedule_recurring(self.interval)?;
        self.handle = Some(handle);
        self.starts += 1;
        tracing::trace!(
            target: targets::AUTOPLAY,
            ?handle,
            interval = ?self.interval,
            "autoplay started"
        );
        Ok(true)
    }

    /// Cancel the pending timer, if any.
    ///
    /// The handle is only forgotten once the host confirms the cancel, so a
    /// failed stop is retried by the next `stop()` or `start()`.
    pub fn stop<H: HostSurface>(&mut self, host: &mut H) -> HostResult<()> {
        if let Some(handle) = self.handle {
            host.cancel(handle)?;
            self.handle = None;
            tracing::trace!(target: targets::AUTOPLAY, ?handle, "autoplay stopped");
        }
        Ok(())
    }

    /// Whether `handle` is this scheduler's live timer.
    pub fn owns(&self, handle: TimerId) -> bool {
        self.handle == Some(handle)
    }

    /// Whether a timer is live.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The live timer handle.
    pub fn handle(&self) -> Option<TimerId> {
        self.handle
    }

    /// Interval between automatic advances.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether scheduling is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of timers successfully scheduled so far.
    pub fn start_count(&self) -> u64 {
        self.starts
    }
}
