//! The slider controller.
//!
//! [`SliderController`] is the composition root of the carousel engine. It
//! owns the slider state, the pagination, the announcer, the autoplay
//! scheduler, the gesture tracker and the keyboard navigator, and it is the
//! only code that changes the committed slide index.
//!
//! Every input is processed through [`dispatch`](SliderController::dispatch)
//! (or the equivalent named method) and runs to completion before the next
//! one is accepted.
//!
//! # Example
//!
//! ```
//! use glide::{HeadlessSurface, Key, SlideSet, SliderCommand, SliderConfig, SliderController};
//!
//! let mut slider =
//!     SliderController::new(SlideSet::untitled(5), SliderConfig::default(), HeadlessSurface::new())
//!         .unwrap();
//!
//! slider.index_changed.connect(|index| println!("now on slide {}", index + 1));
//!
//! slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
//! slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();
//!
//! assert_eq!(slider.index(), 1);
//! assert_eq!(slider.host().announcement(), "Slide 2 slide 2 of 5");
//! ```
//!
//! # Signals
//!
//! - `index_changed(usize)`: Emitted when a settled transition changes the index
//! - `announced(String)`: Emitted with the text of every announcement
//! - `drag_started(())`: Emitted when a pointer drag begins
//! - `drag_finished(GestureOutcome)`: Emitted when a pointer drag ends

use std::time::Duration;

use glide_core::logging::targets;
use glide_core::{Signal, TimerId};

use crate::announcer::{self, Announcer};
use crate::autoplay::AutoplayScheduler;
use crate::command::SliderCommand;
use crate::config::SliderConfig;
use crate::error::{Result, SliderError};
use crate::gesture::{GestureOutcome, GestureTracker};
use crate::headless::HeadlessSurface;
use crate::host::{HostSurface, PointerId};
use crate::keyboard::{Key, KeyboardNavigator};
use crate::pagination::Pagination;
use crate::slide::SlideSet;
use crate::state::{self, SliderState};

/// Carousel interaction engine bound to one slide set and one host surface.
pub struct SliderController<H: HostSurface> {
    slides: SlideSet,
    config: SliderConfig,
    host: H,
    state: SliderState,
    pagination: Pagination,
    announcer: Announcer,
    autoplay: AutoplayScheduler,
    gesture: GestureTracker,
    keyboard: KeyboardNavigator,
    disposed: bool,

    /// Signal emitted when a settled transition changes the index.
    pub index_changed: Signal<usize>,

    /// Signal emitted with the text of every announcement.
    pub announced: Signal<String>,

    /// Signal emitted when a pointer drag begins.
    pub drag_started: Signal<()>,

    /// Signal emitted when a pointer drag ends.
    pub drag_finished: Signal<GestureOutcome>,
}

impl<H: HostSurface> SliderController<H> {
    /// Build a controller, create its pagination on `host`, settle on the
    /// configured initial slide and start autoplay.
    ///
    /// With an empty slide set the controller is created disabled: it issues
    /// no host commands and ignores all input.
    pub fn new(slides: SlideSet, config: SliderConfig, host: H) -> Result<Self> {
        config.validate()?;

        let mut controller = Self {
            autoplay: AutoplayScheduler::new(config.autoplay_interval())
                .with_enabled(config.autoplay),
            gesture: GestureTracker::with_config(config.gesture_config()),
            slides,
            config,
            host,
            state: SliderState::default(),
            pagination: Pagination::default(),
            announcer: Announcer::new(),
            keyboard: KeyboardNavigator::new(),
            disposed: false,
            index_changed: Signal::new(),
            announced: Signal::new(),
            drag_started: Signal::new(),
            drag_finished: Signal::new(),
        };

        if controller.slides.is_empty() {
            tracing::debug!(target: targets::CONTROLLER, "no slides, slider disabled");
            return Ok(controller);
        }

        controller.pagination = Pagination::build(&mut controller.host, controller.slides.len())?;
        let initial = (controller.config.initial_index % controller.slides.len()) as i64;
        let announce = controller.config.announce_initial;
        controller.set_index(initial, announce)?;
        controller.restart_autoplay()?;

        tracing::debug!(
            target: targets::CONTROLLER,
            slides = controller.slides.len(),
            index = controller.state.index,
            "slider mounted"
        );
        Ok(controller)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The committed slide index.
    pub fn index(&self) -> usize {
        self.state.index
    }

    /// Snapshot of the slider state.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// The bound slides.
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    /// The configuration the controller was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The host surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host surface.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Announcement state.
    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    /// Autoplay state.
    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    /// Gesture state.
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Whether the viewport holds keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.keyboard.has_focus()
    }

    /// Whether the controller has slides to navigate.
    pub fn is_enabled(&self) -> bool {
        !self.slides.is_empty() && !self.disposed
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // =========================================================================
    // Entry point
    // =========================================================================

    /// Process one input command.
    #[tracing::instrument(skip(self), target = "glide::controller", level = "trace")]
    pub fn dispatch(&mut self, command: SliderCommand) -> Result<()> {
        match command {
            SliderCommand::Advance => self.advance(),
            SliderCommand::Retreat => self.retreat(),
            SliderCommand::GoTo(index) => self.go_to(index),
            SliderCommand::PointerDown {
                pointer,
                position,
                viewport_width,
            } => self.pointer_down(pointer, position, viewport_width),
            SliderCommand::DragTo { position } => self.drag_to(position),
            SliderCommand::PointerUp => self.pointer_up(),
            SliderCommand::PointerCancel => self.pointer_cancel(),
            SliderCommand::KeyPress(key) => self.key_press(key),
            SliderCommand::FocusChanged(focused) => self.set_focus(focused),
            SliderCommand::TimerFired(handle) => self.timer_fired(handle),
        }
    }

    // =========================================================================
    // Index transitions
    // =========================================================================

    /// Move to `requested` (wrapped into range) and update every visible
    /// surface. Announces the new slide when `announce` is set.
    ///
    /// The state is written before any host command is issued. Host commands
    /// are idempotent, so calling `set_index` again with the same index after
    /// a host failure repairs the surface. Returns the normalized index.
    pub fn set_index(&mut self, requested: i64, announce: bool) -> Result<usize> {
        self.ensure_live()?;
        let count = self.slides.len();
        if count == 0 {
            return Err(SliderError::NoSlides);
        }

        let previous = self.state.index;
        let index = state::normalize_index(requested, count);
        self.state.settle(index);

        self.host.apply_transform(state::strip_offset(index))?;
        for slide in 0..count {
            self.host.set_slide_active(slide, slide == index)?;
        }
        self.pagination.sync(&mut self.host, index)?;

        if announce {
            let text = announcer::message(&self.slides, index);
            self.announcer.announce(&mut self.host, text.clone())?;
            self.announced.emit(text);
        }

        tracing::debug!(target: targets::CONTROLLER, requested, index, announce, "slide settled");
        if index != previous {
            self.index_changed.emit(index);
        }
        Ok(index)
    }

    /// Next-slide button: step forward and restart autoplay.
    pub fn advance(&mut self) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        self.navigate(self.state.index as i64 + 1)
    }

    /// Previous-slide button: step back and restart autoplay.
    pub fn retreat(&mut self) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        self.navigate(self.state.index as i64 - 1)
    }

    /// Pagination click: jump to `index` and restart autoplay.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        if !self.pagination.contains(index) {
            return Err(SliderError::IndicatorOutOfRange {
                index,
                count: self.pagination.len(),
            });
        }
        self.navigate(index as i64)
    }

    fn navigate(&mut self, requested: i64) -> Result<()> {
        self.set_index(requested, true)?;
        self.restart_autoplay()
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handle a key press. Only arrow keys act, and only while focused.
    pub fn key_press(&mut self, key: Key) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        match self.keyboard.navigate(key) {
            Some(step) => self.navigate(self.state.index as i64 + step.offset()),
            None => {
                tracing::trace!(
                    target: targets::CONTROLLER,
                    ?key,
                    focused = self.keyboard.has_focus(),
                    "key ignored"
                );
                Ok(())
            }
        }
    }

    /// Record a viewport focus change. Gaining focus counts as an
    /// interaction and restarts autoplay.
    pub fn set_focus(&mut self, focused: bool) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        if self.keyboard.set_focused(focused) && focused {
            self.restart_autoplay()?;
        }
        Ok(())
    }

    // =========================================================================
    // Pointer drag
    // =========================================================================

    /// Begin a drag: capture the pointer and stop autoplay until release.
    pub fn pointer_down(
        &mut self,
        pointer: PointerId,
        position: f32,
        viewport_width: f32,
    ) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        if !self.gesture.press(pointer, position, viewport_width) {
            return Ok(());
        }

        if let Err(err) = self.host.capture_pointer(pointer) {
            self.gesture.abort();
            tracing::warn!(
                target: targets::CONTROLLER,
                %err,
                "pointer capture failed, drag dropped"
            );
            return Err(err.into());
        }
        self.state.is_dragging = true;
        self.state.drag_offset_percent = 0.0;

        let stopped = self.autoplay.stop(&mut self.host);
        self.state.autoplay_active = self.autoplay.is_running();
        self.drag_started.emit(());
        stopped?;
        Ok(())
    }

    /// Track the pointer and preview the strip offset. The committed index
    /// is not changed.
    pub fn drag_to(&mut self, position: f32) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        let Some(percent) = self.gesture.drag_to(position) else {
            return Ok(());
        };
        self.state.drag_offset_percent = percent;
        self.host.apply_transform(self.state.visible_offset())?;
        Ok(())
    }

    /// End the drag: commit one step past the threshold, otherwise snap
    /// back silently. Autoplay restarts either way.
    pub fn pointer_up(&mut self) -> Result<()> {
        self.finish_drag()
    }

    /// The host cancelled the pointer stream. Evaluated exactly like a
    /// release.
    pub fn pointer_cancel(&mut self) -> Result<()> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        let Some((outcome, sample)) = self.gesture.release() else {
            return Ok(());
        };
        self.state.is_dragging = false;

        // Every step runs even if an earlier one fails, so the pointer is
        // never left captured and autoplay is never left stopped.
        let released = self.host.release_pointer(sample.pointer);
        let settled = match outcome {
            GestureOutcome::Commit(step) => {
                self.set_index(self.state.index as i64 + step.offset(), true)
            }
            GestureOutcome::Cancel => self.set_index(self.state.index as i64, false),
        };
        let restarted = self.restart_autoplay();

        tracing::debug!(
            target: targets::CONTROLLER,
            ?outcome,
            delta = sample.delta(),
            "drag finished"
        );
        self.drag_finished.emit(outcome);

        released?;
        settled?;
        restarted
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// A host timer fired. Only this controller's live autoplay timer
    /// advances the slider; stale handles are ignored.
    pub fn timer_fired(&mut self, handle: TimerId) -> Result<()> {
        if !self.accepts_input()? {
            return Ok(());
        }
        if !self.autoplay.owns(handle) || self.state.is_dragging {
            tracing::trace!(target: targets::AUTOPLAY, ?handle, "stale autoplay tick ignored");
            return Ok(());
        }
        tracing::trace!(target: targets::AUTOPLAY, ?handle, "autoplay tick");
        self.set_index(self.state.index as i64 + 1, true)?;
        Ok(())
    }

    /// Restart the autoplay timer. While a drag is in progress the timer
    /// stays stopped; the release restarts it.
    fn restart_autoplay(&mut self) -> Result<()> {
        if self.state.is_dragging {
            tracing::trace!(target: targets::AUTOPLAY, "autoplay restart deferred until release");
            return Ok(());
        }
        let started = self.autoplay.start(&mut self.host, self.slides.len());
        self.state.autoplay_active = self.autoplay.is_running();
        started?;
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Tear the controller down: cancel the autoplay timer, release any
    /// captured pointer and disconnect every observer. Further input is
    /// rejected with [`SliderError::Disposed`]. Calling `dispose` again is a
    /// no-op.
    pub fn dispose(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.disposed = true;

        let stopped = self.autoplay.stop(&mut self.host);
        self.state.autoplay_active = self.autoplay.is_running();

        let released = match self.gesture.abort() {
            Some(sample) => {
                self.state.is_dragging = false;
                self.state.drag_offset_percent = 0.0;
                self.host.release_pointer(sample.pointer)
            }
            None => Ok(()),
        };
        self.keyboard.set_focused(false);

        self.index_changed.disconnect_all();
        self.announced.disconnect_all();
        self.drag_started.disconnect_all();
        self.drag_finished.disconnect_all();

        tracing::debug!(target: targets::CONTROLLER, index = self.state.index, "slider disposed");
        stopped?;
        released?;
        Ok(())
    }

    fn ensure_live(&self) -> Result<()> {
        if self.disposed {
            return Err(SliderError::Disposed);
        }
        Ok(())
    }

    /// `Ok(false)` when the controller is disabled and input should be
    /// dropped.
    fn accepts_input(&self) -> Result<bool> {
        self.ensure_live()?;
        if self.slides.is_empty() {
            tracing::trace!(target: targets::CONTROLLER, "input ignored, slider disabled");
            return Ok(false);
        }
        Ok(true)
    }
}

impl SliderController<HeadlessSurface> {
    /// Advance the headless clock and deliver every timer that fired.
    ///
    /// Returns the number of autoplay ticks that advanced the slider.
    pub fn advance_clock(&mut self, by: Duration) -> Result<usize> {
        let mut ticks = 0;
        for handle in self.host.advance(by) {
            if self.autoplay.owns(handle) && !self.state.is_dragging {
                ticks += 1;
            }
            self.dispatch(SliderCommand::TimerFired(handle))?;
        }
        Ok(ticks)
    }
}

impl<H: HostSurface> Drop for SliderController<H> {
    fn drop(&mut self) {
        if let Err(err) = self.dispose() {
            tracing::warn!(target: targets::CONTROLLER, %err, "slider teardown failed");
        }
    }
}

impl<H: HostSurface> std::fmt::Debug for SliderController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderController")
            .field("slides", &self.slides.len())
            .field("state", &self.state)
            .field("autoplay", &self.autoplay)
            .field("gesture", &self.gesture)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

// Ensure the controller can move to the thread that owns the host.
static_assertions::assert_impl_all!(SliderController<HeadlessSurface>: Send);
