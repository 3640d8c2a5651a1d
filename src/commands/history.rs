//! Undo/redo and glue-group commands. None of these record history themselves.

use super::{Args, Command};
use crate::editable::EditSession;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct Undo;

impl Command for Undo {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        edit.undo()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Redo;

impl Command for Redo {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        edit.redo()?;
        Ok(())
    }
}

/// Open a glue group at the current history position unless one is open
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkUndoGroupsForGluing;

impl Command for MarkUndoGroupsForGluing {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        edit.mark_undo_groups_for_gluing();
        Ok(())
    }
}

/// Close the open glue group, merging its actions into one
#[derive(Debug, Clone, Copy, Default)]
pub struct GlueMarkedUndoGroups;

impl Command for GlueMarkedUndoGroups {
    fn run(&self, edit: &mut EditSession<'_>, _args: &Args) -> Result<()> {
        edit.glue_marked_undo_groups();
        Ok(())
    }
}
