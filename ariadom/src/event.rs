/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse button pressed. `path` lists element IDs from the root down to
    /// `target`, so listeners can test containment without the tree.
    MouseDown {
        target: Option<String>,
        path: Vec<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse button pressed over a clickable element
    Click {
        target: String,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved onto a clickable element
    MouseEnter { target: String },
    /// Pointer moved off a clickable element
    MouseLeave { target: String },
    /// Mouse wheel event
    Scroll {
        target: Option<String>,
        path: Vec<String>,
        x: u16,
        y: u16,
        delta_y: i16,
    },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Discriminant of [`Event`], used to subscribe document listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Key,
    MouseDown,
    Click,
    MouseEnter,
    MouseLeave,
    Scroll,
    Focus,
    Blur,
    Resize,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Key { .. } => EventKind::Key,
            Event::MouseDown { .. } => EventKind::MouseDown,
            Event::Click { .. } => EventKind::Click,
            Event::MouseEnter { .. } => EventKind::MouseEnter,
            Event::MouseLeave { .. } => EventKind::MouseLeave,
            Event::Scroll { .. } => EventKind::Scroll,
            Event::Focus { .. } => EventKind::Focus,
            Event::Blur { .. } => EventKind::Blur,
            Event::Resize { .. } => EventKind::Resize,
        }
    }

    /// The element this event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. }
            | Event::MouseDown { target, .. }
            | Event::Scroll { target, .. } => target.as_deref(),
            Event::Click { target, .. }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target }
            | Event::Focus { target }
            | Event::Blur { target } => Some(target),
            Event::Resize { .. } => None,
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
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Any key without a mapping above.
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
