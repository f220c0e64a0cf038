use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, path_to, Content, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::{hit_test, hit_test_any};
use crate::layout::LayoutResult;

/// Tracks the focused and hovered elements and turns raw terminal input
/// into targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    hovered: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Get the clickable element under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// The focusable element after the current one (Tab order), wrapping.
    pub fn next_focusable(&self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let next = match self.current_index(&focusable) {
            Some(i) => (i + 1) % focusable.len(),
            None => 0,
        };
        focusable.get(next).cloned()
    }

    /// The focusable element before the current one (Shift+Tab order), wrapping.
    pub fn prev_focusable(&self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let prev = match self.current_index(&focusable) {
            Some(0) | None => focusable.len().checked_sub(1)?,
            Some(i) => i - 1,
        };
        focusable.get(prev).cloned()
    }

    fn current_index(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    /// Move focus to `target`, producing the Blur/Focus pair this causes.
    fn move_focus(&mut self, target: Option<String>) -> Vec<Event> {
        if self.focused == target {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(old) = self.focused.take() {
            events.push(Event::Blur { target: old });
        }
        if let Some(new) = target {
            log::debug!("[focus] -> {}", new);
            self.focused = Some(new.clone());
            events.push(Event::Focus { target: new });
        }
        events
    }

    /// Mark the focused element (and its text input state) in the tree.
    pub fn apply(&self, element: &mut Element) {
        let is_focused = self.focused.as_deref() == Some(element.id.as_str());
        element.focused = is_focused;
        match &mut element.content {
            Content::TextInput { focused, .. } => *focused = is_focused,
            Content::Children(children) => {
                for child in children {
                    self.apply(child);
                }
            }
            _ => {}
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Pressing a mouse button moves focus to the nearest focusable element
    /// on the path to the pressed element, or clears focus when there is
    /// none, the way a browser document does.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => {
                            let next = self.next_focusable(root);
                            events.extend(self.move_focus(next));
                        }
                        Key::BackTab => {
                            let prev = self.prev_focusable(root);
                            events.extend(self.move_focus(prev));
                        }
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            let button = MouseButton::from(button);
                            let target = hit_test_any(layout, root, x, y);
                            let path = target
                                .as_deref()
                                .map(|id| path_to(root, id))
                                .unwrap_or_default();

                            let focus_target = (button == MouseButton::Left)
                                .then(|| focusable_on_path(root, &path))
                                .flatten();

                            events.push(Event::MouseDown {
                                target,
                                path,
                                x,
                                y,
                                button,
                            });

                            if button == MouseButton::Left {
                                events.extend(self.move_focus(focus_target));
                                if let Some(target) = hit_test(layout, root, x, y) {
                                    events.push(Event::Click {
                                        target,
                                        x,
                                        y,
                                        button,
                                    });
                                }
                            }
                        }
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                            let hovered = hit_test(layout, root, x, y);
                            if hovered != self.hovered {
                                if let Some(old) = self.hovered.take() {
                                    events.push(Event::MouseLeave { target: old });
                                }
                                if let Some(new) = hovered {
                                    self.hovered = Some(new.clone());
                                    events.push(Event::MouseEnter { target: new });
                                }
                            }
                        }
                        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                            let delta_y = if mouse.kind == MouseEventKind::ScrollDown {
                                1
                            } else {
                                -1
                            };
                            let target = hit_test_any(layout, root, x, y);
                            let path = target
                                .as_deref()
                                .map(|id| path_to(root, id))
                                .unwrap_or_default();
                            events.push(Event::Scroll {
                                target,
                                path,
                                x,
                                y,
                                delta_y,
                            });
                        }
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        events
    }
}

/// Deepest focusable element on a root-to-target path.
fn focusable_on_path(root: &Element, path: &[String]) -> Option<String> {
    path.iter()
        .rev()
        .find(|id| find_element(root, id).is_some_and(|el| el.focusable))
        .cloned()
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
