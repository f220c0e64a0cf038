use serde::{Deserialize, Serialize};

/// Presentation settings for a combobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    /// Width of the input and listbox in cells, borders included.
    pub width: u16,
    /// Rows shown before the listbox starts scrolling.
    pub max_visible_rows: u16,
    pub placeholder: Option<String>,
    /// Text of the indicator shown when nothing matches.
    pub no_results_text: String,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            width: 40,
            max_visible_rows: 6,
            placeholder: None,
            no_results_text: "No results found".to_string(),
        }
    }
}

impl ComboboxConfig {
    /// Listbox viewport height in rows; never zero.
    pub fn viewport_rows(&self) -> usize {
        usize::from(self.max_visible_rows.max(1))
    }
}
