//! Document model - the text buffer, its selection, history and settings

use crate::config::Settings;
use crate::editable::{Action, Buffer, EditSession, Region, RegionSet, UndoStack};
use crate::error::Result;
use crate::frontend::{DummyFrontend, Frontend};

/// One open document.
///
/// The buffer is only ever mutated inside an edit session opened by
/// [`Document::edit`] or by the command pipeline; the session is closed on
/// every exit path, so no write lock outlives a command.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Buffer,
    regions: RegionSet,
    history: UndoStack,
    settings: Settings,
    /// Scratch documents apply edits without recording history
    scratch: bool,
    /// Incremented every time the buffer changes
    revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document with a single cursor at 0
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), UndoStack::new())
    }

    pub fn with_settings(settings: Settings, history: UndoStack) -> Self {
        Self {
            buffer: Buffer::new(),
            regions: RegionSet::cursor(0),
            history,
            settings,
            scratch: false,
            revision: 0,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Full content as a String
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Replace the selection, merging regions that overlap or touch
    pub fn set_regions<I>(&mut self, regions: I)
    where
        I: IntoIterator<Item = Region>,
    {
        self.regions = regions.into_iter().collect();
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn is_scratch(&self) -> bool {
        self.scratch
    }

    pub fn set_scratch(&mut self, scratch: bool) {
        self.scratch = scratch;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Edit the document directly, outside any named command.
    ///
    /// The edits are recorded as one undoable action unless the document is
    /// scratch. If `f` fails, everything it did is reverted.
    pub fn edit<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut EditSession<'_>) -> Result<R>,
    {
        self.transact("edit", &DummyFrontend, f)
    }

    /// Open a session, run `f`, and close the session.
    ///
    /// On success the session's edits become an [`Action`] on the history.
    /// On failure the session's edits are reverted and the selection restored.
    pub(crate) fn transact<F, R>(
        &mut self,
        name: &str,
        frontend: &dyn Frontend,
        f: F,
    ) -> Result<R>
    where
        F: FnOnce(&mut EditSession<'_>) -> Result<R>,
    {
        let regions_before = self.regions.clone();
        let mut session = EditSession::new(
            &mut self.buffer,
            &mut self.regions,
            &mut self.history,
            &self.settings,
            frontend,
        );

        let value = match f(&mut session) {
            Ok(value) => value,
            Err(e) => {
                if !session.edits().is_empty() {
                    tracing::warn!(
                        "{} failed after {} edits, rolling back: {}",
                        name,
                        session.edits().len(),
                        e
                    );
                }
                session.rollback(regions_before);
                return Err(e);
            }
        };
        let (edits, replayed) = session.finish();

        if edits.is_empty() {
            if replayed {
                self.revision += 1;
            }
            return Ok(value);
        }

        self.revision += 1;
        if self.scratch {
            tracing::trace!("{}: {} unrecorded scratch edits", name, edits.len());
        } else {
            let action = Action::new(name, edits, regions_before, self.regions.clone());
            self.history.push(action);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EditError;

    #[test]
    fn test_new_document_has_one_cursor() {
        let doc = Document::new();
        assert_eq!(doc.text(), "");
        assert_eq!(doc.regions().regions(), &[Region::cursor(0)]);
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn test_edit_records_action() {
        let mut doc = Document::new();
        doc.edit(|e| e.insert(0, "hello")).unwrap();
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.history().len(), 1);
        assert_eq!(doc.history().position(), 1);
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn test_scratch_edits_skip_history() {
        let mut doc = Document::new();
        doc.set_scratch(true);
        doc.edit(|e| e.insert(0, "seed")).unwrap();
        doc.set_scratch(false);
        assert_eq!(doc.text(), "seed");
        assert!(doc.history().is_empty());
        assert_eq!(doc.revision(), 1);
    }

    #[test]
    fn test_failed_edit_is_rolled_back() {
        let mut doc = Document::new();
        doc.edit(|e| e.insert(0, "abc")).unwrap();
        doc.set_regions([Region::cursor(2)]);

        let err = doc
            .edit(|e| {
                e.insert(0, "xyz")?;
                e.set_regions(RegionSet::cursor(0));
                e.erase(10, 1)
            })
            .unwrap_err();

        assert!(matches!(err, EditError::OutOfBounds { .. }));
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.regions().regions(), &[Region::cursor(2)]);
        assert_eq!(doc.history().len(), 1);
    }
}
