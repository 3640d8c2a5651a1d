//! Editor configuration and per-document settings
//!
//! Defaults live in `~/.config/rune-edit/config.yaml`:
//!
//! ```yaml
//! settings:
//!   translate_tabs_to_spaces: true
//!   tab_size: 2
//! history_limit: 500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config_paths::ConfigPaths;
use crate::editable::DEFAULT_HISTORY_LIMIT;
use crate::error::{EditError, Result};

/// Settings read by editing commands. Commands never write them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Insert spaces up to the next tab stop instead of a tab character
    #[serde(default)]
    pub translate_tabs_to_spaces: bool,

    /// Columns per tab stop
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

fn default_tab_size() -> usize {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translate_tabs_to_spaces: false,
            tab_size: default_tab_size(),
        }
    }
}

/// Engine-wide configuration; new documents start from these values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub settings: Settings,

    /// Maximum number of undo actions kept per document
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            history_limit: default_history_limit(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(paths) = ConfigPaths::resolve() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        let path = paths.config_file();

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EditError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| EditError::Config(format!("{} ({})", e, path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| EditError::Config(format!("Failed to parse config: {}", e)))
    }
}
