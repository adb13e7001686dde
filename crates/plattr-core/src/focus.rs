//! Input focus and on-screen keyboard detection for keyboard-aware layouts.
//!
//! On phones the bottom navigation bar is hidden while the user types. Two
//! signals feed that decision: a text-entry element holding focus, and the
//! visual viewport shrinking because the keyboard slid up.

/// Viewport shrink (in CSS px) that counts as an open keyboard.
pub const KEYBOARD_THRESHOLD_PX: u32 = 150;

/// `type` values of `<input>` that bring up a text keyboard.
const TEXT_INPUT_TYPES: &[&str] = &["text", "search", "email", "tel", "url", "password", "number"];

/// The element that received focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTarget {
    /// Lowercase or uppercase tag name, e.g. `INPUT`.
    pub tag: String,
    /// The `type` attribute, if any.
    pub input_type: Option<String>,
    pub content_editable: bool,
}

impl FocusTarget {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn input(input_type: &str) -> Self {
        Self {
            tag: "input".to_string(),
            input_type: Some(input_type.to_string()),
            content_editable: false,
        }
    }
}

/// Whether focusing `target` brings up a text keyboard.
pub fn is_text_entry(target: &FocusTarget) -> bool {
    if target.content_editable {
        return true;
    }
    match target.tag.to_ascii_lowercase().as_str() {
        "textarea" | "select" => true,
        "input" => match target.input_type.as_deref() {
            None => true,
            Some(t) => {
                let t = t.trim().to_ascii_lowercase();
                t.is_empty() || TEXT_INPUT_TYPES.contains(&t.as_str())
            }
        },
        _ => false,
    }
}

/// Tracks whether a text-entry element currently holds focus.
#[derive(Debug, Default)]
pub struct FocusTracker {
    focused: bool,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_in(&mut self, target: &FocusTarget) {
        self.focused = is_text_entry(target);
    }

    pub fn focus_out(&mut self) {
        self.focused = false;
    }

    pub fn is_input_focused(&self) -> bool {
        self.focused
    }
}

/// Infers keyboard visibility from viewport height changes.
#[derive(Debug)]
pub struct KeyboardDetector {
    baseline: u32,
    open: bool,
}

impl KeyboardDetector {
    pub fn new(initial_height: u32) -> Self {
        Self {
            baseline: initial_height,
            open: false,
        }
    }

    /// Feed a new viewport height; returns whether the keyboard is open.
    pub fn on_resize(&mut self, height: u32) -> bool {
        if height >= self.baseline {
            // Rotation or browser chrome hiding: take the larger size as the new baseline.
            self.baseline = height;
            self.open = false;
        } else {
            self.open = self.baseline - height >= KEYBOARD_THRESHOLD_PX;
        }
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn baseline(&self) -> u32 {
        self.baseline
    }
}

/// Bottom navigation is hidden while typing.
pub fn hide_bottom_nav(focus: &FocusTracker, keyboard: &KeyboardDetector) -> bool {
    focus.is_input_focused() || keyboard.is_open()
}
