//! Slide descriptors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One content unit shown by the slider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Display label for the slide content (alt text, caption).
    pub label: String,
    /// Optional zone tag, used as the spoken name of the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl Slide {
    /// Create a slide with a display label and no zone tag.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            zone: None,
        }
    }

    /// Set the zone tag using builder pattern.
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }
}

/// An ordered, fixed-length sequence of slides.
///
/// Immutable after construction; cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSet {
    slides: Arc<[Slide]>,
}

impl SlideSet {
    /// Create a slide set from the given slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides: slides.into(),
        }
    }

    /// Create `count` slides labelled "Slide 1" through "Slide {count}".
    pub fn untitled(count: usize) -> Self {
        (1..=count).map(|n| Slide::new(format!("Slide {n}"))).collect()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the set holds no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get the slide at `index`.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterate over the slides in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// The spoken name of the slide at `index`: its zone tag, or
    /// `"Slide {index + 1}"` when it has none.
    pub fn spoken_name(&self, index: usize) -> String {
        match self.get(index).and_then(|slide| slide.zone.as_deref()) {
            Some(zone) if !zone.is_empty() => zone.to_string(),
            _ => format!("Slide {}", index + 1),
        }
    }
}

impl FromIterator<Slide> for SlideSet {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
