//! Keyboard navigation.
//!
//! Directional keys move the slider one slide while its viewport holds
//! focus. Every other key, and every key while unfocused, is ignored.

use crate::gesture::Step;

/// A key reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// A printable character.
    Character(char),
    /// Anything else.
    Unknown,
}

impl Key {
    /// Convert a standard key name (`"ArrowLeft"`, `"Enter"`, `"a"`, ...)
    /// into a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unknown,
                }
            }
        }
    }
}

/// Maps directional keys to steps while the viewport is focused.
#[derive(Debug, Default)]
pub struct KeyboardNavigator {
    focused: bool,
}

impl KeyboardNavigator {
    /// Create an unfocused navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus change. Returns `true` if the focus state changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }

    /// Whether the slider viewport holds input focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// The step requested by `key`, if any.
    pub fn navigate(&self, key: Key) -> Option<Step> {
        if !self.focused {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(Step::Backward),
            Key::ArrowRight => Some(Step::Forward),
            _ => None,
        }
    }
}
