//! Input commands accepted by the slider controller.

use glide_core::TimerId;

use crate::host::PointerId;
use crate::keyboard::Key;

/// A single input to the slider, from any source.
///
/// Every input source (autoplay timer, pointer, keyboard, pagination and
/// previous/next buttons) is reduced to one of these and processed through
/// [`SliderController::dispatch`](crate::SliderController::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum SliderCommand {
    /// Next-slide button.
    Advance,
    /// Previous-slide button.
    Retreat,
    /// Pagination indicator click.
    GoTo(usize),
    /// Pointer pressed inside the viewport.
    PointerDown {
        /// The pressed pointer.
        pointer: PointerId,
        /// Horizontal position.
        position: f32,
        /// Viewport width at press time.
        viewport_width: f32,
    },
    /// Pointer moved.
    DragTo {
        /// Horizontal position.
        position: f32,
    },
    /// Pointer released.
    PointerUp,
    /// The host cancelled the pointer stream.
    PointerCancel,
    /// Key pressed while the viewport may hold focus.
    KeyPress(Key),
    /// Viewport focus gained (`true`) or lost (`false`).
    FocusChanged(bool),
    /// A host timer fired.
    TimerFired(TimerId),
}
