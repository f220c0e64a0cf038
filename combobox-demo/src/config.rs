//! Demo configuration, loaded from TOML.

use std::fs;
use std::path::Path;

use combobox::ComboboxConfig;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::DemoError;
use crate::paths;

/// Options offered when the config names none.
pub const DEFAULT_OPTIONS: [&str; 11] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Kiwi",
    "Lemon",
    "Mango",
];

/// Input placeholder unless `[combobox]` sets one; `placeholder = ""`
/// turns it off.
pub const DEFAULT_PLACEHOLDER: &str = "Search fruits...";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Strings the combobox suggests, in display order.
    pub options: Vec<String>,
    pub log_level: LevelFilter,
    pub combobox: ComboboxConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            log_level: LevelFilter::Debug,
            combobox: ComboboxConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one the platform config file
    /// is read if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Widget settings with the demo's placeholder filled in.
    pub fn combobox_config(&self) -> ComboboxConfig {
        let mut config = self.combobox.clone();
        config.placeholder.get_or_insert_with(|| DEFAULT_PLACEHOLDER.to_string());
        config
    }

    pub fn from_file(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| DemoError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
