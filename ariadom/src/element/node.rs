use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::aria::{self, Role};
use super::Content;
use crate::types::{Direction, Edges, Overflow, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Semantics
    pub role: Option<Role>,
    /// ARIA attributes keyed by full attribute name (`aria-expanded`, ...).
    pub aria: BTreeMap<String, String>,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub max_height: Option<u16>,
    pub padding: Edges,

    // Flex container
    pub direction: Direction,
    pub gap: u16,

    // Overflow
    pub overflow_y: Overflow,
    /// Rows of content scrolled past the top edge. Only honored when
    /// `overflow_y` clips.
    pub scroll_offset: u16,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    /// Set by `FocusState::apply`, not by user code.
    pub focused: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            role: None,
            aria: BTreeMap::new(),
            classes: Vec::new(),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            max_height: None,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            overflow_y: Overflow::Visible,
            scroll_offset: 0,
            style: Style::default(),
            style_focused: None,
            focusable: false,
            clickable: false,
            focused: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a text input element. The cursor starts at the end of `value`.
    pub fn text_input(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            id: generate_id("input"),
            role: Some(Role::TextBox),
            content: Content::TextInput {
                value,
                cursor,
                placeholder: None,
                focused: false,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Semantics
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.aria.insert(name.into(), value.into());
        self
    }

    pub fn aria_bool(self, name: impl Into<String>, value: bool) -> Self {
        self.aria(name, aria::bool_value(value))
    }

    pub fn get_aria(&self, name: &str) -> Option<&str> {
        self.aria.get(name).map(String::as_str)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scroll_offset(mut self, offset: u16) -> Self {
        self.scroll_offset = offset;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    /// The style to paint with, taking focus state into account.
    pub fn effective_style(&self) -> &Style {
        match (&self.style_focused, self.focused) {
            (Some(style), true) => style,
            _ => &self.style,
        }
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Text input methods

    /// Set the cursor position (byte offset) for a text input.
    pub fn cursor(mut self, position: usize) -> Self {
        if let Content::TextInput { cursor, value, .. } = &mut self.content {
            *cursor = position.min(value.len());
        }
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Set whether the text input is focused (shows cursor).
    pub fn input_focused(mut self, is_focused: bool) -> Self {
        if let Content::TextInput { focused, .. } = &mut self.content {
            *focused = is_focused;
        }
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
