//! Slider state and index arithmetic.

/// Normalize a requested index into `[0, len)`, wrapping negative and
/// overflowing values around the ends.
///
/// `len` must be non-zero.
pub fn normalize_index(requested: i64, len: usize) -> usize {
    debug_assert!(len > 0, "normalize_index requires at least one slide");
    requested.rem_euclid(len as i64) as usize
}

/// Strip offset, in percent of the viewport width, that shows slide `index`.
pub fn strip_offset(index: usize) -> f32 {
    -100.0 * index as f32
}

/// The mutable state of a slider.
///
/// Owned exclusively by the controller; everything else observes it through
/// shared references.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderState {
    pub(crate) index: usize,
    pub(crate) drag_offset_percent: f32,
    pub(crate) is_dragging: bool,
    pub(crate) autoplay_active: bool,
}

impl SliderState {
    /// The committed slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The live drag preview offset in percent (zero when not dragging).
    pub fn drag_offset_percent(&self) -> f32 {
        self.drag_offset_percent
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether an autoplay timer is live.
    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    /// The strip offset currently shown, including any drag preview.
    pub fn visible_offset(&self) -> f32 {
        strip_offset(self.index) + self.drag_offset_percent
    }

    pub(crate) fn settle(&mut self, index: usize) {
        self.index = index;
        self.drag_offset_percent = 0.0;
    }
}
