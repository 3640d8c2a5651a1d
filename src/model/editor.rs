//! Editor - the command registry and the frontend that documents are shown in

use std::fmt;
use std::rc::Rc;

use crate::commands::{Args, Command, CommandRegistry};
use crate::config::EditorConfig;
use crate::editable::{EditSession, UndoStack};
use crate::error::{EditError, Result};
use crate::frontend::{DummyFrontend, Frontend};
use crate::model::Document;

/// Runs named commands against documents.
///
/// Each command runs inside its own edit session: it sees every region of
/// the document, its edits are recorded as one undoable action named after
/// the command, and a failing command leaves the document untouched.
pub struct Editor {
    commands: CommandRegistry,
    frontend: Rc<dyn Frontend>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("commands", &self.commands)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Editor with the built-in commands, default config and no frontend
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            commands: CommandRegistry::with_builtins(),
            frontend: Rc::new(DummyFrontend),
            config,
        }
    }

    pub fn set_frontend(&mut self, frontend: Rc<dyn Frontend>) {
        self.frontend = frontend;
    }

    pub fn frontend(&self) -> &dyn Frontend {
        self.frontend.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Empty document using the configured settings and history limit
    pub fn new_document(&self) -> Document {
        Document::with_settings(
            self.config.settings.clone(),
            UndoStack::with_max_size(self.config.history_limit),
        )
    }

    /// Register a command, replacing any existing one with the same name
    pub fn register(&mut self, name: &str, command: impl Command + 'static) {
        self.commands.register(name, command);
    }

    pub fn register_fn<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&mut EditSession<'_>, &Args) -> Result<()> + 'static,
    {
        self.commands.register_fn(name, f);
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Run the command registered as `name` on `doc`
    pub fn run_command(&self, doc: &mut Document, name: &str, args: &Args) -> Result<()> {
        let Some(command) = self.commands.get(name) else {
            tracing::warn!("Unknown command: {}", name);
            return Err(EditError::UnknownCommand(name.to_string()));
        };

        tracing::debug!("run_command {} {:?}", name, args);
        doc.transact(name, self.frontend.as_ref(), |session| {
            command.run(session, args)
        })
    }
}
