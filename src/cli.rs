//! Command-line arguments and script format for the replay tool
//!
//! A script is a YAML list of steps:
//!
//! ```yaml
//! - command: insert
//!   args: { characters: "// " }
//!   regions: [[0, 0], [12, 12]]
//! - command: move
//!   args: { by: stops, forward: true, word_end: true, extend: true }
//! ```
//!
//! `regions`, when present, replaces the selection before the step runs.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use rune_edit::commands::Args;
use rune_edit::config::EditorConfig;
use rune_edit::editable::{Region, RegionSet};
use rune_edit::error::Result;

/// Replay a script of editing commands against a text file
#[derive(Parser, Debug)]
#[command(name = "rune-edit", version, about = "Replay editing commands against a text file")]
pub struct CliArgs {
    /// Text file to load into the document
    #[arg(value_name = "TEXT_FILE")]
    pub file: PathBuf,

    /// YAML script of commands to run
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of the one in the config directory
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Columns per tab stop
    #[arg(long, value_name = "N")]
    pub tab_size: Option<usize>,

    /// Insert spaces instead of tab characters
    #[arg(long)]
    pub soft_tabs: bool,
}

impl CliArgs {
    /// Resolve the editor config, applying command-line overrides on top
    pub fn editor_config(&self) -> Result<EditorConfig> {
        let mut config = match &self.config {
            Some(path) => EditorConfig::from_path(path)?,
            None => EditorConfig::load(),
        };
        if let Some(tab_size) = self.tab_size {
            config.settings.tab_size = tab_size;
        }
        if self.soft_tabs {
            config.settings.translate_tabs_to_spaces = true;
        }
        Ok(config)
    }
}

/// One scripted command invocation
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub command: String,
    #[serde(default)]
    pub args: Args,
    #[serde(default)]
    pub regions: Option<Vec<(usize, usize)>>,
}

impl Step {
    pub fn regions(&self) -> Option<impl Iterator<Item = Region> + '_> {
        self.regions
            .as_ref()
            .map(|rs| rs.iter().map(|&r| Region::from(r)))
    }
}

pub fn parse_script(source: &str) -> std::result::Result<Vec<Step>, serde_yaml::Error> {
    serde_yaml::from_str(source)
}

/// "(a, b) (c, d)"
pub fn format_regions(regions: &RegionSet) -> String {
    regions
        .regions()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
