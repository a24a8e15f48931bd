//! Preview file format
//!
//! A preview file describes one combobox:
//!
//! ```toml
//! variant = "group"
//! key = "object-switcher"
//! focused = true
//!
//! [props]
//! dropdown = '<div id="listbox-1" class="slds-dropdown" role="listbox"></div>'
//! dropdown_type = "listbox"
//! addon = '<div class="slds-listbox_object-switcher"></div>'
//! addon_position = "start"
//! combobox_position = "end"
//! has_interactions = true
//! ```
//!
//! Files ending in `.json` are read as JSON with the same shape.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strata_cn::{ComboboxProps, ComboboxVariant};

/// Key used when neither `key` nor `props.id` is set
const DEFAULT_KEY: &str = "combobox";

/// One combobox to render
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PreviewFile {
    /// Which component to build
    #[serde(default)]
    pub variant: ComboboxVariant,

    /// Instance key for the component state
    #[serde(default)]
    pub key: Option<String>,

    /// Deliver a focus event before rendering
    #[serde(default)]
    pub focused: bool,

    #[serde(default)]
    pub props: ComboboxProps,
}

impl PreviewFile {
    /// Load a preview file, picking the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Whether `focused` was requested on a combobox that ignores events
    pub fn focus_ignored(&self) -> bool {
        self.focused && !self.props.has_interactions
    }

    /// Instance key: explicit `key`, else the input id, else a fixed default
    pub fn key(&self) -> &str {
        self.key
            .as_deref()
            .or(self.props.id.as_deref())
            .unwrap_or(DEFAULT_KEY)
    }
}
