//! Accessible combobox: a text input paired with a filterable,
//! keyboard-navigable list of suggestions.
//!
//! The widget renders to an [`ariadom::Element`] tree carrying the WAI-ARIA
//! combobox pattern (`aria-expanded`, `aria-activedescendant`,
//! `aria-selected`, ...) and reacts to routed [`ariadom::Event`]s.
//!
//! ```ignore
//! let combobox = Combobox::new(["Apple", "Banana", "Cherry"]);
//! let document = Document::new();
//! let _mounted = combobox.mount(&document);
//!
//! loop {
//!     let mut root = Element::col().child(combobox.element());
//!     focus.apply(&mut root);
//!     let layout = term.render(&root)?;
//!     for event in focus.process_events(&term.poll(None)?, &root, layout) {
//!         document.dispatch(&event);
//!         combobox.handle_event(&event);
//!     }
//! }
//! ```

mod config;
mod events;
mod filter;
mod options;
mod render;
mod state;

pub use config::ComboboxConfig;
pub use events::{EventResult, MountGuard};
pub use filter::{filter_options, filter_positions};
pub use options::OptionSet;
pub use state::{Combobox, ComboboxId};
