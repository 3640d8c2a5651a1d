//! Where rune-edit keeps its settings file and logs.
//!
//! The root is `$XDG_CONFIG_HOME/rune-edit` (or `~/.config/rune-edit`) on
//! Unix and `%APPDATA%\rune-edit` on Windows.

use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};

const APP_DIR: &str = "rune-edit";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Daily-rolled log file prefix inside [`ConfigPaths::logs_dir`]
pub const LOG_FILE: &str = "rune-edit.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    root: PathBuf,
}

impl ConfigPaths {
    /// Resolve the root from the environment; `None` without a home directory
    pub fn resolve() -> Option<Self> {
        platform_config_home().map(|home| Self::from_root(home.join(APP_DIR)))
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Create the logs directory if needed and return it
    pub fn ensure_logs_dir(&self) -> Result<PathBuf> {
        let logs = self.logs_dir();
        std::fs::create_dir_all(&logs).map_err(|e| {
            EditError::Config(format!("cannot create {}: {}", logs.display(), e))
        })?;
        Ok(logs)
    }
}

#[cfg(target_os = "windows")]
fn platform_config_home() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}
