//! Edit history (undo/redo) with glue groups.
//!
//! A command's primitive edits are collected into one [`Action`] together
//! with the selection before and after it ran. The [`UndoStack`] keeps
//! actions in order with a position separating applied actions from the ones
//! available to redo.

use super::buffer::Buffer;
use super::selection::RegionSet;
use crate::error::Result;

/// One primitive mutation of a buffer.
///
/// Erase captures the removed text so every edit can produce its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { offset: usize, text: String },
    Erase { offset: usize, text: String },
}

impl Edit {
    /// Get the inverse edit for undo
    pub fn inverse(&self) -> Edit {
        match self {
            Edit::Insert { offset, text } => Edit::Erase {
                offset: *offset,
                text: text.clone(),
            },
            Edit::Erase { offset, text } => Edit::Insert {
                offset: *offset,
                text: text.clone(),
            },
        }
    }

    /// Net change in buffer length, in runes
    pub fn delta(&self) -> isize {
        match self {
            Edit::Insert { text, .. } => text.chars().count() as isize,
            Edit::Erase { text, .. } => -(text.chars().count() as isize),
        }
    }

    pub fn apply(&self, buffer: &mut Buffer) -> Result<()> {
        match self {
            Edit::Insert { offset, text } => buffer.insert(*offset, text)?,
            Edit::Erase { offset, text } => buffer.erase(*offset, text.chars().count())?,
        };
        Ok(())
    }
}

/// Apply edits in order. If one fails, the ones already applied are reverted.
pub(crate) fn apply_all<'a, I>(edits: I, buffer: &mut Buffer) -> Result<()>
where
    I: IntoIterator<Item = &'a Edit>,
{
    let mut applied: Vec<&Edit> = Vec::new();
    for edit in edits {
        if let Err(e) = edit.apply(buffer) {
            revert(applied.into_iter().rev(), buffer);
            return Err(e);
        }
        applied.push(edit);
    }
    Ok(())
}

/// Undo already-applied edits, most recent first.
pub(crate) fn revert<'a, I>(applied: I, buffer: &mut Buffer)
where
    I: IntoIterator<Item = &'a Edit>,
{
    for edit in applied {
        // The inverse of an edit that just succeeded always fits the buffer
        if let Err(e) = edit.inverse().apply(buffer) {
            tracing::error!("Failed to revert {:?}: {}", edit, e);
        }
    }
}

/// The edits produced by one command invocation, plus the selection
/// immediately before and after the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Name of the command that produced the action ("glued" for composites)
    pub name: String,
    pub edits: Vec<Edit>,
    pub regions_before: RegionSet,
    pub regions_after: RegionSet,
    /// Recorded while a glue group was open
    pub glue: bool,
}

impl Action {
    pub fn new(
        name: impl Into<String>,
        edits: Vec<Edit>,
        regions_before: RegionSet,
        regions_after: RegionSet,
    ) -> Self {
        Self {
            name: name.into(),
            edits,
            regions_before,
            regions_after,
            glue: false,
        }
    }

    /// Revert this action's edits (last first) and restore the prior selection
    pub fn undo(&self, buffer: &mut Buffer, regions: &mut RegionSet) -> Result<()> {
        let inverses: Vec<Edit> = self.edits.iter().rev().map(Edit::inverse).collect();
        apply_all(&inverses, buffer)?;
        *regions = self.regions_before.clone();
        Ok(())
    }

    /// Reapply this action's edits and restore the resulting selection
    pub fn redo(&self, buffer: &mut Buffer, regions: &mut RegionSet) -> Result<()> {
        apply_all(&self.edits, buffer)?;
        *regions = self.regions_after.clone();
        Ok(())
    }
}

/// Default number of actions retained
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Position-addressed action history.
///
/// `actions[..position]` are applied, `actions[position..]` can be redone.
#[derive(Debug, Clone)]
pub struct UndoStack {
    actions: Vec<Action>,
    position: usize,
    glue_mark: Option<usize>,
    max_size: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a history that keeps at most `max_size` actions
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            actions: Vec::new(),
            position: 0,
            glue_mark: None,
            max_size: max_size.max(1),
        }
    }

    /// Record a freshly run action, discarding anything available to redo.
    pub fn push(&mut self, mut action: Action) {
        // A mark inside the discarded redo tail moves back to where the new action lands
        self.glue_mark = self.glue_mark.map(|m| m.min(self.position));
        self.actions.truncate(self.position);
        action.glue = self.glue_mark.is_some();
        self.actions.push(action);
        self.position = self.actions.len();

        if self.actions.len() > self.max_size {
            let excess = self.actions.len() - self.max_size;
            self.actions.drain(..excess);
            self.position -= excess;
            self.glue_mark = self.glue_mark.map(|m| m.saturating_sub(excess));
        }
    }

    /// Undo the last applied action. Returns false at the start of history.
    pub fn undo(&mut self, buffer: &mut Buffer, regions: &mut RegionSet) -> Result<bool> {
        if self.position == 0 {
            return Ok(false);
        }
        let action = &self.actions[self.position - 1];
        action.undo(buffer, regions)?;
        tracing::debug!(
            "Undid {} ({} edits), position {} → {}",
            action.name,
            action.edits.len(),
            self.position,
            self.position - 1
        );
        self.position -= 1;
        Ok(true)
    }

    /// Redo the next action. Returns false at the end of history.
    pub fn redo(&mut self, buffer: &mut Buffer, regions: &mut RegionSet) -> Result<bool> {
        let Some(action) = self.actions.get(self.position) else {
            return Ok(false);
        };
        action.redo(buffer, regions)?;
        tracing::debug!(
            "Redid {} ({} edits), position {} → {}",
            action.name,
            action.edits.len(),
            self.position,
            self.position + 1
        );
        self.position += 1;
        Ok(true)
    }

    /// Open a glue group at the current position; no effect if one is open
    pub fn mark_for_gluing(&mut self) {
        if self.glue_mark.is_none() {
            tracing::debug!("Glue group opened at position {}", self.position);
            self.glue_mark = Some(self.position);
        }
    }

    /// Merge every action recorded since the glue mark into one.
    ///
    /// The composite's edits are the concatenation of the merged actions'
    /// edits, its selections the first's "before" and the last's "after".
    /// Without a pending mark, or with nothing recorded since it, the
    /// history is left unchanged.
    pub fn glue_marked(&mut self) {
        let Some(mark) = self.glue_mark.take() else {
            return;
        };
        if mark >= self.position {
            tracing::debug!("Glue group at {} closed with nothing to glue", mark);
            return;
        }

        let merged: Vec<Action> = self.actions.drain(mark..self.position).collect();
        let count = merged.len();
        let regions_before = merged[0].regions_before.clone();
        let regions_after = merged[count - 1].regions_after.clone();
        let edits = merged.into_iter().flat_map(|a| a.edits).collect();

        let mut composite = Action::new("glued", edits, regions_before, regions_after);
        composite.glue = true;
        self.actions.insert(mark, composite);
        self.position = mark + 1;
        tracing::debug!("Glued {} actions at position {}", count, mark);
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn glue_mark(&self) -> Option<usize> {
        self.glue_mark
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.position < self.actions.len()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::region::Region;

    fn insert_action(buffer: &mut Buffer, offset: usize, text: &str) -> Action {
        let edit = buffer.insert(offset, text).unwrap();
        let end = offset + text.chars().count();
        Action::new(
            "insert",
            vec![edit],
            RegionSet::cursor(offset),
            RegionSet::cursor(end),
        )
    }

    #[test]
    fn test_edit_inverse() {
        let edit = Edit::Insert {
            offset: 3,
            text: "𝄞x".to_string(),
        };
        assert_eq!(
            edit.inverse(),
            Edit::Erase {
                offset: 3,
                text: "𝄞x".to_string()
            }
        );
        assert_eq!(edit.delta(), 2);
        assert_eq!(edit.inverse().delta(), -2);
        assert_eq!(edit.inverse().inverse(), edit);
    }

    #[test]
    fn test_apply_all_rolls_back_on_failure() {
        let mut buffer = Buffer::new();
        buffer.insert(0, "abc").unwrap();
        let edits = vec![
            Edit::Insert {
                offset: 0,
                text: "xy".to_string(),
            },
            Edit::Erase {
                offset: 4,
                text: "zzzz".to_string(),
            },
        ];
        assert!(apply_all(&edits, &mut buffer).is_err());
        assert_eq!(buffer.to_string(), "abc");
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut buffer = Buffer::new();
        let mut regions = RegionSet::cursor(0);
        let mut history = UndoStack::new();

        history.push(insert_action(&mut buffer, 0, "a"));
        history.push(insert_action(&mut buffer, 1, "b"));
        assert_eq!(history.position(), 2);
        assert!(!history.can_redo());

        assert!(history.undo(&mut buffer, &mut regions).unwrap());
        assert_eq!(buffer.to_string(), "a");
        assert_eq!(regions.regions(), &[Region::cursor(1)]);
        assert!(history.can_redo());

        assert!(history.redo(&mut buffer, &mut regions).unwrap());
        assert_eq!(buffer.to_string(), "ab");
        assert_eq!(regions.regions(), &[Region::cursor(2)]);
    }

    #[test]
    fn test_undo_redo_at_boundaries_are_noops() {
        let mut buffer = Buffer::new();
        let mut regions = RegionSet::cursor(0);
        let mut history = UndoStack::new();

        assert!(!history.undo(&mut buffer, &mut regions).unwrap());
        assert!(!history.redo(&mut buffer, &mut regions).unwrap());
        assert_eq!(history.position(), 0);
    }

    #[test]
    fn test_push_discards_redo_tail() {
        let mut buffer = Buffer::new();
        let mut regions = RegionSet::cursor(0);
        let mut history = UndoStack::new();

        history.push(insert_action(&mut buffer, 0, "a"));
        history.push(insert_action(&mut buffer, 1, "b"));
        history.undo(&mut buffer, &mut regions).unwrap();
        history.push(insert_action(&mut buffer, 1, "c"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.position(), 2);
        assert!(!history.can_redo());
        assert_eq!(buffer.to_string(), "ac");
    }

    #[test]
    fn test_glue_merges_into_one_action() {
        let mut buffer = Buffer::new();
        let mut regions = RegionSet::cursor(0);
        let mut history = UndoStack::new();

        history.push(insert_action(&mut buffer, 0, "x"));
        history.mark_for_gluing();
        history.push(insert_action(&mut buffer, 1, "a"));
        history.mark_for_gluing();
        history.push(insert_action(&mut buffer, 2, "b"));
        history.push(insert_action(&mut buffer, 3, "c"));
        assert_eq!(history.glue_mark(), Some(1));
        assert!(history.actions()[1..].iter().all(|a| a.glue));

        history.glue_marked();
        assert_eq!(history.len(), 2);
        assert_eq!(history.position(), 2);
        assert_eq!(history.glue_mark(), None);
        let glued = &history.actions()[1];
        assert_eq!(glued.edits.len(), 3);
        assert_eq!(glued.regions_before.regions(), &[Region::cursor(1)]);
        assert_eq!(glued.regions_after.regions(), &[Region::cursor(4)]);

        history.undo(&mut buffer, &mut regions).unwrap();
        assert_eq!(buffer.to_string(), "x");
        history.redo(&mut buffer, &mut regions).unwrap();
        assert_eq!(buffer.to_string(), "xabc");
    }

    #[test]
    fn test_glue_without_mark_or_actions_is_noop() {
        let mut buffer = Buffer::new();
        let mut history = UndoStack::new();
        history.push(insert_action(&mut buffer, 0, "a"));

        history.glue_marked();
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 1);

        history.mark_for_gluing();
        history.glue_marked();
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 1);
        assert_eq!(history.glue_mark(), None);
    }

    #[test]
    fn test_push_pulls_mark_out_of_discarded_tail() {
        let mut buffer = Buffer::new();
        let mut regions = RegionSet::cursor(0);
        let mut history = UndoStack::new();

        history.push(insert_action(&mut buffer, 0, "x"));
        history.mark_for_gluing();
        history.push(insert_action(&mut buffer, 1, "y"));
        history.undo(&mut buffer, &mut regions).unwrap();
        history.undo(&mut buffer, &mut regions).unwrap();

        history.push(insert_action(&mut buffer, 0, "a"));
        assert_eq!(history.glue_mark(), Some(0));
        history.push(insert_action(&mut buffer, 1, "b"));
        history.glue_marked();

        assert_eq!(history.len(), 1);
        history.undo(&mut buffer, &mut regions).unwrap();
        assert_eq!(buffer.to_string(), "");
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut buffer = Buffer::new();
        let mut history = UndoStack::with_max_size(3);

        for i in 0..5 {
            history.push(insert_action(&mut buffer, i, "z"));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 3);
    }
}
