use crate::file::FileRef;

/// High-level events with element targeting.
///
/// `target` is the id of the innermost element the event was delivered to;
/// `None` means the event hit no element (the bare page).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Key press, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Primary-button click
    Click { target: Option<String> },
    /// Pointer pressed (fires before the click that may follow)
    PointerDown { target: Option<String> },
    /// Page or element scrolled
    Scroll { target: Option<String> },
    /// Window resized
    Resize { width: i32, height: i32 },
    /// Page finished loading
    Load,
    /// Text content edited by the user
    Input { target: String },
    /// Clipboard cut inside an element
    Cut { target: String },
    /// Clipboard paste inside an element
    Paste { target: String },
    /// Committed value change
    Change { target: String, bubbles: bool },
    /// Files dragged over an element
    DragOver { target: String },
    /// Dragged files left an element
    DragLeave { target: String },
    /// Files dropped onto an element
    Drop { target: String, files: Vec<FileRef> },
    /// Named application event with a JSON payload
    Custom {
        name: String,
        target: String,
        detail: serde_json::Value,
        bubbles: bool,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn pointer_down(target: impl Into<String>) -> Self {
        Self::PointerDown {
            target: Some(target.into()),
        }
    }

    pub fn key(target: Option<String>, key: Key) -> Self {
        Self::Key {
            target,
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// A bubbling `change` notification on `target`.
    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
            bubbles: true,
        }
    }

    /// The element this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. }
            | Self::Click { target }
            | Self::PointerDown { target }
            | Self::Scroll { target } => target.as_deref(),
            Self::Input { target }
            | Self::Cut { target }
            | Self::Paste { target }
            | Self::Change { target, .. }
            | Self::DragOver { target }
            | Self::DragLeave { target }
            | Self::Drop { target, .. }
            | Self::Custom { target, .. }
            | Self::Focus { target }
            | Self::Blur { target } => Some(target),
            Self::Resize { .. } | Self::Load => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}
