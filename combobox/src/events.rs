//! Event handling and document mounting for the Combobox widget.

use ariadom::{Document, Event, EventKind, Key, ListenerGuard, Modifiers};

use crate::state::{Combobox, ComboboxId};

/// Whether the widget acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget handled the event; the host should not act on it too.
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Keeps a combobox attached to a document.
///
/// While alive, pointer presses anywhere outside the widget close its list.
/// Dropping the guard detaches the widget and releases the listener.
#[must_use = "the combobox is unmounted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct MountGuard {
    id: ComboboxId,
    _listener: ListenerGuard,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        log::debug!("[combobox] {} unmounted", self.id);
    }
}

impl Combobox {
    /// Start watching `document` for presses outside the widget.
    pub fn mount(&self, document: &Document) -> MountGuard {
        let widget = self.clone();
        let wrapper_id = self.wrapper_id();
        let listener = document.add_listener(EventKind::MouseDown, move |event| {
            let Event::MouseDown { path, .. } = event else {
                return;
            };
            if !path.contains(&wrapper_id) {
                widget.click_outside();
            }
        });
        log::debug!(
            "[combobox] {} mounted as listener {}",
            self.id(),
            listener.id()
        );

        MountGuard {
            id: self.id(),
            _listener: listener,
        }
    }

    /// Handle a key pressed while the input has focus.
    pub fn handle_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Down => {
                self.arrow_down();
                EventResult::Consumed
            }
            Key::Up => {
                self.arrow_up();
                EventResult::Consumed
            }
            Key::Enter => match self.enter() {
                Some(_) => EventResult::Consumed,
                None => EventResult::Ignored,
            },
            Key::Escape => {
                if self.escape() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Char(c) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            Key::Left => {
                self.text_cursor_left();
                EventResult::Consumed
            }
            Key::Right => {
                self.text_cursor_right();
                EventResult::Consumed
            }
            Key::Home => {
                self.text_cursor_home();
                EventResult::Consumed
            }
            Key::End => {
                self.text_cursor_end();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Route a UI event to the widget. Events aimed at other elements are
    /// ignored; presses outside the widget are seen through [`Combobox::mount`].
    ///
    /// Pointer events name the option their row was drawn for. Events queued
    /// behind a keystroke may have been hit-tested against an older tree, so
    /// a row whose option left the view, or a row of a closed list, is ignored.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.input_id() => self.handle_key(*key, *modifiers),
            Event::Focus { target } if *target == self.input_id() => {
                self.focus();
                EventResult::Consumed
            }
            Event::MouseEnter { target } => match self.row_position(target) {
                Some(index) if self.hover(index) => EventResult::Consumed,
                _ => EventResult::Ignored,
            },
            Event::Click { target, .. } => match self.row_position(target) {
                Some(index) if self.click_option(index).is_some() => EventResult::Consumed,
                _ => {
                    if self.option_key(target).is_some() {
                        log::debug!(
                            "[combobox] {} ignored click on stale row {}",
                            self.id(),
                            target
                        );
                    }
                    EventResult::Ignored
                }
            },
            Event::Scroll { path, delta_y, .. } if path.contains(&self.listbox_id()) => {
                self.scroll_by(*delta_y);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
