//! The demo page and its event loop.

use ariadom::{
    Document, Edges, Element, Event, FocusState, Key, Rgb, Role, Size, Style, Terminal,
};
use combobox::{Combobox, ComboboxConfig};

use crate::config::DemoConfig;
use crate::error::DemoError;

const BACKGROUND: Rgb = Rgb::new(22, 24, 30);
const TITLE: Rgb = Rgb::new(96, 165, 250);
const TEXT: Rgb = Rgb::new(220, 222, 230);

pub struct App {
    combobox: Combobox,
    /// Last option committed from the list
    selected: Option<String>,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        let combobox = config.combobox_config();
        Self::with_options(config.options, combobox)
    }

    pub fn with_options(options: Vec<String>, config: ComboboxConfig) -> Self {
        Self {
            combobox: Combobox::with_config(options, config),
            selected: None,
        }
    }

    /// Build the page around the combobox.
    fn page(&self, focus: &FocusState) -> Element {
        let status = match &self.selected {
            Some(selected) => format!("Selected: {}", selected),
            None => "Nothing selected yet".to_string(),
        };

        let mut root = Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(BACKGROUND).foreground(TEXT))
            .child(
                Element::text("Accessible ComboBox Demo")
                    .id("title")
                    .role(Role::Heading)
                    .style(Style::new().foreground(TITLE).bold()),
            )
            .child(
                Element::text(
                    "Tab to focus, type to filter, Up/Down to move, Enter to pick, \
                     Esc to close, Ctrl+Q to quit",
                )
                .id("hint")
                .style(Style::new().dim()),
            )
            .child(self.combobox.element())
            .child(Element::text(status).id("status").role(Role::Status));

        focus.apply(&mut root);
        root
    }

    /// Record a committed option, if any.
    fn sync_selection(&mut self) -> bool {
        match self.combobox.take_selection() {
            Some(selected) => {
                log::info!("[app] selected {:?}", selected);
                self.selected = Some(selected);
                true
            }
            None => false,
        }
    }

    /// Render the page. Draws a second time when the terminal squeezed the
    /// listbox and the highlighted row had to be scrolled back into view.
    fn draw(&self, term: &mut Terminal, focus: &FocusState) -> Result<Element, DemoError> {
        loop {
            let root = self.page(focus);
            self.combobox.clear_dirty();
            let layout = term.render(&root)?;
            if !self.combobox.sync_viewport(layout) {
                return Ok(root);
            }
        }
    }

    pub fn run(mut self) -> Result<(), DemoError> {
        let mut term = Terminal::new()?;
        let document = Document::new();
        let _mounted = self.combobox.mount(&document);
        let mut focus = FocusState::new();

        let mut root = self.draw(&mut term, &focus)?;

        // Start with the input focused so typing works right away
        let mut events = Vec::new();
        if let Some(id) = focus.next_focusable(&root) {
            focus.focus(&id);
            events.push(Event::Focus { target: id });
        }

        loop {
            let mut needs_render = false;
            for event in &events {
                if is_quit(event) {
                    log::info!("[app] quit");
                    return Ok(());
                }
                document.dispatch(event);
                if !self.combobox.handle_event(event).is_consumed() {
                    log::trace!("[app] unhandled {:?}", event);
                }
                needs_render |= matches!(
                    event,
                    Event::Focus { .. } | Event::Blur { .. } | Event::Resize { .. }
                );
            }
            needs_render |= self.sync_selection();

            if needs_render || self.combobox.is_dirty() {
                root = self.draw(&mut term, &focus)?;
            }

            let raw = term.poll(None)?;
            events = focus.process_events(&raw, &root, term.layout());
        }
    }
}

fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key {
            key: Key::Char('c' | 'q'),
            modifiers,
            ..
        } if modifiers.ctrl
    )
}
