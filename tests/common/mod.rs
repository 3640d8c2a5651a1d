//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;

use rune_edit::commands::Args;
use rune_edit::editable::{Buffer, Region};
use rune_edit::frontend::Frontend;
use rune_edit::model::{Document, Editor};

pub const SAMPLE: &str = "Hello World!\nTest123123\nAbrakadabra\n";

/// Document seeded with `text` (not undoable) and one cursor at 0
pub fn test_document(text: &str) -> Document {
    test_document_in(&Editor::new(), text)
}

/// Like [`test_document`], but with the editor's settings and history limit
pub fn test_document_in(editor: &Editor, text: &str) -> Document {
    let mut doc = editor.new_document();
    doc.set_scratch(true);
    doc.edit(|e| e.insert(0, text)).unwrap();
    doc.set_scratch(false);
    doc.set_regions([Region::cursor(0)]);
    doc
}

/// `[(a, b), ...]` → regions, without merging
pub fn regions(pairs: &[(usize, usize)]) -> Vec<Region> {
    pairs.iter().map(|&p| Region::from(p)).collect()
}

pub fn set_regions(doc: &mut Document, pairs: &[(usize, usize)]) {
    doc.set_regions(regions(pairs));
}

pub fn current_regions(doc: &Document) -> Vec<Region> {
    doc.regions().regions().to_vec()
}

/// Build command arguments from a JSON object literal
pub fn args(value: serde_json::Value) -> Args {
    match value {
        serde_json::Value::Object(map) => Args::from(map),
        serde_json::Value::Null => Args::new(),
        other => panic!("command args must be an object, got {}", other),
    }
}

/// Run a command and panic if it fails
pub fn run(editor: &Editor, doc: &mut Document, name: &str, value: serde_json::Value) {
    editor
        .run_command(doc, name, &args(value))
        .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
}

/// Frontend that reports a fixed row span as visible and remembers the last
/// region it was asked to show
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    pub first_row: usize,
    pub last_row: usize,
    pub shown: Cell<Option<Region>>,
}

impl RecordingFrontend {
    pub fn new(first_row: usize, last_row: usize) -> Self {
        Self {
            first_row,
            last_row,
            shown: Cell::new(None),
        }
    }
}

impl Frontend for RecordingFrontend {
    fn show(&self, _buffer: &Buffer, region: Region) {
        self.shown.set(Some(region));
    }

    fn visible_region(&self, buffer: &Buffer) -> Region {
        let first = buffer.line(buffer.text_point(self.first_row, 1)).unwrap();
        let last = buffer.line(buffer.text_point(self.last_row, 1)).unwrap();
        Region::new(first.begin(), last.end())
    }
}
