//! FieldDefaults - Library-Wide Field Settings
//!
//! Read from `form-widgets.toml`. Every key is optional:
//!
//! ```toml
//! no_value_message = "None"
//! no_selection_message = "None Selected"
//! searchable_threshold = 10
//! locale = "en-US"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::i18n::{self, Locale};
use crate::state::select_state::DEFAULT_SEARCHABLE_THRESHOLD;

pub const CONFIG_FILE_NAME: &str = "form-widgets.toml";

/// Defaults applied to fields that do not override them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    /// Read-mode text for an empty value; falls back to the translated "None"
    pub no_value_message: Option<String>,
    /// Read-mode text for an empty selection; falls back to the translated "None Selected"
    pub no_selection_message: Option<String>,
    pub searchable_threshold: usize,
    pub locale: Locale,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            no_value_message: None,
            no_selection_message: None,
            searchable_threshold: DEFAULT_SEARCHABLE_THRESHOLD,
            locale: Locale::default(),
        }
    }
}

impl gpui::Global for FieldDefaults {}

impl FieldDefaults {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Path of the config file in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "form-widgets").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory, falling back to the defaults
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(defaults) => {
                tracing::debug!(path = %path.display(), "Loaded field defaults");
                defaults
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read field defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn no_value_message(&self) -> String {
        self.no_value_message
            .clone()
            .unwrap_or_else(|| i18n::t(self.locale, "no-value").to_string())
    }

    pub fn no_selection_message(&self) -> String {
        self.no_selection_message
            .clone()
            .unwrap_or_else(|| i18n::t(self.locale, "no-selection").to_string())
    }

    /// Translate a built-in string in the configured locale
    pub fn t(&self, key: &str) -> gpui::SharedString {
        i18n::t(self.locale, key)
    }
}
