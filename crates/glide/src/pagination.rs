//! Pagination indicators.
//!
//! One selectable indicator per slide. After every settled transition exactly
//! one indicator is selected.

use crate::host::{HostResult, HostSurface};

/// Accessible label of the indicator for slide `index`.
pub fn indicator_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Mirrors the active slide index onto the host's indicators.
#[derive(Debug, Default)]
pub struct Pagination {
    count: usize,
    selected: Option<usize>,
}

impl Pagination {
    /// Create `count` indicators on the host, in order.
    pub fn build<H: HostSurface>(host: &mut H, count: usize) -> HostResult<Self> {
        for index in 0..count {
            host.create_indicator(index, &indicator_label(index))?;
        }
        Ok(Self {
            count,
            selected: None,
        })
    }

    /// Select the indicator at `index` and deselect all others.
    ///
    /// Every indicator is written on each call so a previously failed sync
    /// is repaired by the next one.
    pub fn sync<H: HostSurface>(&mut self, host: &mut H, index: usize) -> HostResult<()> {
        debug_assert!(index < self.count);
        for i in 0..self.count {
            host.set_indicator_selected(i, i == index)?;
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether there are no indicators.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `index` names an existing indicator.
    pub fn contains(&self, index: usize) -> bool {
        index < self.count
    }

    /// The selected indicator, once the first sync has happened.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
