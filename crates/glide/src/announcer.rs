//! Live-region announcements for assistive technology.
//!
//! The announcer owns a single text surface. Each announcement replaces the
//! previous text; nothing is appended, so a screen reader only ever hears the
//! slide that is currently settled.

use glide_core::logging::targets;

use crate::host::{HostResult, HostSurface};
use crate::slide::SlideSet;

/// Build the announcement for slide `index`:
/// `"<zone-or-default-label> slide <index+1> of <N>"`.
pub fn message(slides: &SlideSet, index: usize) -> String {
    format!(
        "{} slide {} of {}",
        slides.spoken_name(index),
        index + 1,
        slides.len()
    )
}

/// Tracks what has been announced.
#[derive(Debug, Default)]
pub struct Announcer {
    current: Option<String>,
    count: u64,
}

impl Announcer {
    /// Create an announcer that has not spoken yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live-region text with `text`.
    ///
    /// The text is only recorded once the host has accepted it.
    pub fn announce<H: HostSurface>(&mut self, host: &mut H, text: String) -> HostResult<()> {
        host.set_announcement_text(&text)?;
        tracing::debug!(target: targets::ANNOUNCER, %text, "announced");
        self.current = Some(text);
        self.count += 1;
        Ok(())
    }

    /// The text currently shown in the live region.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Number of announcements made so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}
