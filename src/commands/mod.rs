//! Named commands and the registry that resolves them.
//!
//! Every command, built-in or external, implements [`Command`]: it receives
//! an open [`EditSession`] and its [`Args`], and either edits the document
//! through the session or fails with [`EditError::InvalidArgs`]. The
//! registry maps names to commands; the [`Editor`](crate::model::Editor)
//! owns one and dispatches through it.

mod args;
mod delete;
mod history;
mod insert;
mod movement;
mod selection;
mod view;

use std::collections::HashMap;

pub use args::Args;
pub use delete::{LeftDelete, RightDelete};
pub use history::{GlueMarkedUndoGroups, MarkUndoGroupsForGluing, Redo, Undo};
pub use insert::Insert;
pub use movement::Move;
pub use selection::{SelectAll, SingleSelection};
pub use view::ScrollLines;

use crate::editable::EditSession;
use crate::error::Result;

pub trait Command {
    fn run(&self, edit: &mut EditSession<'_>, args: &Args) -> Result<()>;
}

/// Closures work as commands, which keeps one-off external commands short
impl<F> Command for F
where
    F: Fn(&mut EditSession<'_>, &Args) -> Result<()>,
{
    fn run(&self, edit: &mut EditSession<'_>, args: &Args) -> Result<()> {
        self(edit, args)
    }
}

/// Name → command lookup
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// A registry holding every built-in command
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("insert", Insert);
        registry.register("left_delete", LeftDelete);
        registry.register("right_delete", RightDelete);
        registry.register("move", Move);
        registry.register("select_all", SelectAll);
        registry.register("single_selection", SingleSelection);
        registry.register("scroll_lines", ScrollLines);
        registry.register("undo", Undo);
        registry.register("redo", Redo);
        registry.register("mark_undo_groups_for_gluing", MarkUndoGroupsForGluing);
        // Both names open a group only if none is pending
        registry.register("maybe_mark_undo_groups_for_gluing", MarkUndoGroupsForGluing);
        registry.register("glue_marked_undo_groups", GlueMarkedUndoGroups);
        registry
    }

    /// Register `command` under `name`, replacing any previous entry
    pub fn register(&mut self, name: &str, command: impl Command + 'static) {
        if self
            .commands
            .insert(name.to_string(), Box::new(command))
            .is_some()
        {
            tracing::debug!("Replaced command {}", name);
        }
    }

    /// Register a closure as a command
    pub fn register_fn<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut EditSession<'_>, &Args) -> Result<()> + 'static,
    {
        self.register(name, f);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
