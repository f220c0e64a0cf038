//! Accessibility roles and ARIA attribute names.

use std::fmt;

pub const ACTIVE_DESCENDANT: &str = "aria-activedescendant";
pub const AUTOCOMPLETE: &str = "aria-autocomplete";
pub const CONTROLS: &str = "aria-controls";
pub const EXPANDED: &str = "aria-expanded";
pub const HAS_POPUP: &str = "aria-haspopup";
pub const LABEL: &str = "aria-label";
pub const SELECTED: &str = "aria-selected";

/// The semantic role an element exposes to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Combobox,
    Heading,
    Listbox,
    Option,
    Status,
    TextBox,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Heading => "heading",
            Role::Listbox => "listbox",
            Role::Option => "option",
            Role::Status => "status",
            Role::TextBox => "textbox",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ARIA boolean attribute value.
pub const fn bool_value(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
