//! Logging setup and selection diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=rune_edit::commands=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/rune-edit/logs/rune-edit.log` with daily rotation.
//! File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{Region, RegionSet};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr, so stdout stays free for command output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let logs_dir = crate::config_paths::ConfigPaths::resolve()
        .ok_or_else(|| "no config directory available".to_string())
        .and_then(|paths| paths.ensure_logs_dir().map_err(|e| e.to_string()));
    let file_layer = match logs_dir {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Copy of a selection for before/after comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSnapshot {
    pub regions: Vec<Region>,
}

impl RegionSnapshot {
    pub fn from_regions(regions: &RegionSet) -> Self {
        Self {
            regions: regions.regions().to_vec(),
        }
    }

    /// Describe what changed between two snapshots, or None if nothing did
    pub fn diff(&self, other: &RegionSnapshot) -> Option<String> {
        if self.regions.len() != other.regions.len() {
            return Some(format!(
                "region count: {} → {}",
                self.regions.len(),
                other.regions.len()
            ));
        }

        let changes: Vec<String> = self
            .regions
            .iter()
            .zip(&other.regions)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(i, (before, after))| format!("#{}: {} → {}", i, before, after))
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }

    /// Log the diff at debug level, if there is one
    pub fn log_diff(&self, other: &RegionSnapshot, context: &str) {
        if let Some(diff) = self.diff(other) {
            tracing::debug!(target: "selection", "{}: {}", context, diff);
        }
    }
}
