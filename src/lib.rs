//! rune-edit - a headless multi-cursor text editing engine
//!
//! Documents hold a rune-addressed buffer, a set of selected regions and an
//! undo history. Named commands run against every region at once inside an
//! edit session, and each invocation becomes one undoable action.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod frontend;
pub mod model;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use commands::{Args, Command};
pub use config::{EditorConfig, Settings};
pub use editable::{Region, RegionSet};
pub use error::EditError;
pub use frontend::Frontend;
pub use model::{Document, Editor};
