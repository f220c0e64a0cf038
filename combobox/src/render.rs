//! Element tree for the Combobox widget.

use ariadom::scroll::clamp_offset;
use ariadom::{Border, Edges, Element, Overflow, Rgb, Role, Size, Style, aria};

use crate::state::{Combobox, ComboboxInner};

const SURFACE: Rgb = Rgb::new(30, 32, 40);
const BORDER: Rgb = Rgb::new(88, 92, 108);
const ACCENT: Rgb = Rgb::new(96, 165, 250);
const MUTED: Rgb = Rgb::new(140, 144, 160);
const HIGHLIGHT: Rgb = Rgb::new(37, 99, 235);

impl Combobox {
    /// Build the widget's element tree.
    ///
    /// ```text
    /// combobox  aria-haspopup=listbox aria-expanded
    /// ├─ textbox  aria-autocomplete=list aria-controls aria-activedescendant?
    /// └─ listbox  (only while open)
    ///    └─ option  aria-selected   (one per match, or a "no results" row)
    /// ```
    pub fn element(&self) -> Element {
        let Ok(inner) = self.inner.read() else {
            return Element::col().id(self.wrapper_id());
        };
        let config = &inner.config;

        let mut input = Element::text_input(inner.query.text())
            .id(self.input_id())
            .cursor(inner.query.cursor())
            .aria(aria::AUTOCOMPLETE, "list")
            .aria(aria::CONTROLS, self.listbox_id())
            .width(Size::Fixed(config.width))
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .background(SURFACE)
                    .border(Border::Rounded)
                    .border_color(BORDER),
            )
            .style_focused(
                Style::new()
                    .background(SURFACE)
                    .border(Border::Rounded)
                    .border_color(ACCENT),
            );
        if let Some(placeholder) = &config.placeholder {
            input = input.placeholder(placeholder.as_str());
        }
        // Rows only exist while open; never point at an unrendered row
        let active = inner
            .highlighted
            .filter(|_| inner.open)
            .and_then(|index| inner.matches().get(index).copied());
        if let Some(key) = active {
            input = input.aria(aria::ACTIVE_DESCENDANT, self.option_id(key));
        }

        let wrapper = Element::col()
            .id(self.wrapper_id())
            .role(Role::Combobox)
            .aria(aria::HAS_POPUP, "listbox")
            .aria_bool(aria::EXPANDED, inner.open)
            .child(input);

        if inner.open {
            wrapper.child(self.listbox(&inner))
        } else {
            wrapper
        }
    }

    fn listbox(&self, inner: &ComboboxInner) -> Element {
        let config = &inner.config;
        let matches = inner.matches();

        let rows: Vec<Element> = if matches.is_empty() {
            vec![
                Element::text(config.no_results_text.as_str())
                    .id(format!("{}-no-results", self.id()))
                    .role(Role::Option)
                    .class("no-results")
                    .padding(Edges::horizontal(1))
                    .style(Style::new().foreground(MUTED).dim()),
            ]
        } else {
            matches
                .iter()
                .enumerate()
                .filter_map(|(index, &key)| {
                    let option = inner.options.as_slice().get(key)?;
                    Some(self.option_row(key, option, inner.highlighted == Some(index)))
                })
                .collect()
        };

        let offset = clamp_offset(inner.scroll_offset, inner.viewport_rows(), rows.len());
        // Two extra rows for the border
        let max_height = u16::try_from(config.viewport_rows() + 2).unwrap_or(u16::MAX);

        Element::col()
            .id(self.listbox_id())
            .role(Role::Listbox)
            .class("combobox-listbox")
            .width(Size::Fixed(config.width))
            .max_height(max_height)
            .overflow_y(Overflow::Scroll)
            .scroll_offset(u16::try_from(offset).unwrap_or(u16::MAX))
            .style(
                Style::new()
                    .background(SURFACE)
                    .border(Border::Single)
                    .border_color(BORDER),
            )
            .children(rows)
    }

    fn option_row(&self, key: usize, option: &str, highlighted: bool) -> Element {
        let row = Element::text(option)
            .id(self.option_id(key))
            .role(Role::Option)
            .aria_bool(aria::SELECTED, highlighted)
            .class("combobox-option")
            .clickable(true)
            .width(Size::Fill)
            .padding(Edges::horizontal(1));

        if highlighted {
            row.class("highlighted").style(
                Style::new()
                    .background(HIGHLIGHT)
                    .foreground(Rgb::WHITE)
                    .bold(),
            )
        } else {
            row
        }
    }
}
