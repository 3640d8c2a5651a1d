//! Edit sessions - the only way to mutate a document's buffer.
//!
//! A session borrows a document's buffer, selection and history for the
//! duration of one command. Every insert/erase issued through it is recorded;
//! when the command finishes the recorded edits become one undoable
//! [`Action`](super::history::Action). If the command fails, the session
//! reverts what it already applied, so a failed command never leaves a
//! half-edited buffer behind.

use super::buffer::Buffer;
use super::history::{self, Edit, UndoStack};
use super::region::Region;
use super::selection::RegionSet;
use crate::config::Settings;
use crate::error::Result;
use crate::frontend::Frontend;

pub struct EditSession<'a> {
    buffer: &'a mut Buffer,
    regions: &'a mut RegionSet,
    history: &'a mut UndoStack,
    settings: &'a Settings,
    frontend: &'a dyn Frontend,
    edits: Vec<Edit>,
    /// History replays in the order they ran, each with the number of
    /// edits recorded before it
    replays: Vec<(usize, Replay)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Undo,
    Redo,
}

impl<'a> EditSession<'a> {
    pub(crate) fn new(
        buffer: &'a mut Buffer,
        regions: &'a mut RegionSet,
        history: &'a mut UndoStack,
        settings: &'a Settings,
        frontend: &'a dyn Frontend,
    ) -> Self {
        Self {
            buffer,
            regions,
            history,
            settings,
            frontend,
            edits: Vec::new(),
            replays: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        self.buffer
    }

    pub fn regions(&self) -> &RegionSet {
        self.regions
    }

    /// Replace the selection wholesale
    pub fn set_regions(&mut self, regions: RegionSet) {
        *self.regions = regions;
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn frontend(&self) -> &dyn Frontend {
        self.frontend
    }

    /// Edits applied so far in this session
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let edit = self.buffer.insert(offset, text)?;
        tracing::trace!("insert {:?} at {}", text, offset);
        self.edits.push(edit);
        Ok(())
    }

    pub fn erase(&mut self, offset: usize, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let edit = self.buffer.erase(offset, count)?;
        tracing::trace!("erase {} runes at {}", count, offset);
        self.edits.push(edit);
        Ok(())
    }

    /// Erase the text a region covers
    pub fn erase_region(&mut self, region: Region) -> Result<()> {
        self.erase(region.begin(), region.len())
    }

    /// Run `f` once per region, left to right, as if all edits were simultaneous.
    ///
    /// `f` receives each region already shifted by the net length change of
    /// the edits made for the regions before it, and returns where that
    /// region should end up given only its own edit. The results are merged
    /// into a fresh selection, so regions that meet after the edit collapse
    /// into one.
    pub fn for_each_region<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Self, Region) -> Result<Region>,
    {
        let original: Vec<Region> = self.regions.regions().to_vec();
        let mut updated = Vec::with_capacity(original.len());
        let mut delta: isize = 0;

        for region in original {
            let len_before = self.buffer.len() as isize;
            let moved = f(self, region.shifted(delta))?;
            delta += self.buffer.len() as isize - len_before;
            updated.push(moved);
        }

        self.regions.clear();
        for region in updated {
            self.regions.add(region);
        }
        Ok(())
    }

    /// Undo the last action. History replay is not itself recorded.
    pub fn undo(&mut self) -> Result<bool> {
        let done = self.history.undo(self.buffer, self.regions)?;
        if done {
            self.replays.push((self.edits.len(), Replay::Undo));
        }
        Ok(done)
    }

    pub fn redo(&mut self) -> Result<bool> {
        let done = self.history.redo(self.buffer, self.regions)?;
        if done {
            self.replays.push((self.edits.len(), Replay::Redo));
        }
        Ok(done)
    }

    pub fn mark_undo_groups_for_gluing(&mut self) {
        self.history.mark_for_gluing();
    }

    pub fn glue_marked_undo_groups(&mut self) {
        self.history.glue_marked();
    }

    /// Revert every edit and history replay made in this session, newest
    /// first, and restore `regions`.
    pub(crate) fn rollback(&mut self, regions: RegionSet) {
        while let Some((recorded, replay)) = self.replays.pop() {
            self.revert_edits_after(recorded);
            let reverted = match replay {
                Replay::Undo => self.history.redo(self.buffer, self.regions),
                Replay::Redo => self.history.undo(self.buffer, self.regions),
            };
            if let Err(e) = reverted {
                tracing::error!("Failed to revert {:?} during rollback: {}", replay, e);
            }
        }
        self.revert_edits_after(0);
        *self.regions = regions;
    }

    fn revert_edits_after(&mut self, recorded: usize) {
        let tail = self.edits.split_off(recorded.min(self.edits.len()));
        history::revert(tail.iter().rev(), self.buffer);
    }

    /// Close the session, returning its edits and whether history was replayed
    pub(crate) fn finish(self) -> (Vec<Edit>, bool) {
        let replayed = !self.replays.is_empty();
        (self.edits, replayed)
    }
}
