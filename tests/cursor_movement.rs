//! Cursor movement tests - by characters and by stops

mod common;

use common::{current_regions, regions, set_regions, test_document, SAMPLE};
use rune_edit::commands::Args;
use rune_edit::error::EditError;
use rune_edit::model::{Document, Editor};
use serde_json::{json, Value};

fn move_regions(
    doc: &mut Document,
    start: &[(usize, usize)],
    by: &str,
    extend: bool,
    forward: bool,
    extra: Value,
) -> Vec<rune_edit::editable::Region> {
    let editor = Editor::new();
    set_regions(doc, start);

    let mut args = common::args(json!({"by": by, "extend": extend, "forward": forward}));
    if let Value::Object(map) = extra {
        for (k, v) in map {
            args.insert(&k, v);
        }
    }
    editor.run_command(doc, "move", &args).unwrap();
    current_regions(doc)
}

#[test]
fn test_move_characters_table() {
    let mut doc = test_document(SAMPLE);
    let cases: &[(&[(usize, usize)], bool, bool, &[(usize, usize)])] = &[
        (&[(1, 1), (3, 3), (6, 6)], false, true, &[(2, 2), (4, 4), (7, 7)]),
        (&[(1, 1), (3, 3), (6, 6)], false, false, &[(0, 0), (2, 2), (5, 5)]),
        (&[(1, 1), (3, 3), (10, 6)], false, true, &[(2, 2), (4, 4), (7, 7)]),
        (&[(1, 1), (3, 3), (10, 6)], false, false, &[(0, 0), (2, 2), (5, 5)]),
        (&[(1, 1), (3, 3), (10, 6)], true, true, &[(1, 2), (3, 4), (10, 7)]),
        (&[(1, 1), (3, 3), (10, 6)], true, false, &[(1, 0), (3, 2), (10, 5)]),
        (&[(1, 3), (3, 5), (10, 7)], true, true, &[(1, 6), (10, 8)]),
    ];

    for (i, (start, extend, forward, expected)) in cases.iter().enumerate() {
        let got = move_regions(&mut doc, start, "characters", *extend, *forward, Value::Null);
        assert_eq!(got, regions(expected), "case {}", i);
    }
    assert_eq!(doc.text(), SAMPLE);
    assert!(doc.history().is_empty());
}

#[test]
fn test_move_word_end_extend() {
    let mut doc = test_document(SAMPLE);
    let got = move_regions(&mut doc, &[(1, 1)], "stops", true, true, json!({"word_end": true}));
    assert_eq!(got, regions(&[(1, 5)]));
}

#[test]
fn test_move_word_begin_forward() {
    let mut doc = test_document(SAMPLE);
    let got = move_regions(&mut doc, &[(1, 1)], "stops", false, true, json!({"word_begin": true}));
    assert_eq!(got, regions(&[(6, 6)]));
}

#[test]
fn test_move_word_begin_backward() {
    let mut doc = test_document(SAMPLE);
    let got = move_regions(&mut doc, &[(6, 6)], "stops", false, false, json!({"word_begin": true}));
    assert_eq!(got, regions(&[(0, 0)]));
}

#[test]
fn test_move_line_end_and_begin() {
    let mut doc = test_document(SAMPLE);
    let got = move_regions(&mut doc, &[(2, 2)], "stops", false, true, json!({"line_end": true}));
    assert_eq!(got, regions(&[(12, 12)]));

    let got = move_regions(&mut doc, &[(16, 16)], "stops", false, false, json!({"line_begin": true}));
    assert_eq!(got, regions(&[(13, 13)]));
}

#[test]
fn test_move_punct_begin() {
    let mut doc = test_document(SAMPLE);
    let got = move_regions(&mut doc, &[(0, 0)], "stops", false, true, json!({"punct_begin": true}));
    assert_eq!(got, regions(&[(11, 11)]));
}

#[test]
fn test_move_empty_line() {
    let mut doc = test_document("one\n\ntwo\n\nthree");
    let got = move_regions(&mut doc, &[(0, 0)], "stops", false, true, json!({"empty_line": true}));
    assert_eq!(got, regions(&[(4, 4)]));

    let got = move_regions(&mut doc, &[(4, 4)], "stops", false, true, json!({"empty_line": true}));
    assert_eq!(got, regions(&[(9, 9)]));
}

#[test]
fn test_move_clamps_at_buffer_edges() {
    let mut doc = test_document("ab");
    let got = move_regions(&mut doc, &[(2, 2)], "characters", false, true, Value::Null);
    assert_eq!(got, regions(&[(2, 2)]));

    let got = move_regions(&mut doc, &[(0, 0)], "characters", false, false, Value::Null);
    assert_eq!(got, regions(&[(0, 0)]));

    // No further word end: stops at the end of the buffer
    let got = move_regions(&mut doc, &[(2, 2)], "stops", false, true, json!({"word_end": true}));
    assert_eq!(got, regions(&[(2, 2)]));
}

#[test]
fn test_move_requires_by() {
    let editor = Editor::new();
    let mut doc = test_document(SAMPLE);
    let err = editor
        .run_command(&mut doc, "move", &common::args(json!({"forward": true})))
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidArgs { .. }));
}

#[test]
fn test_move_rejects_unknown_by() {
    let editor = Editor::new();
    let mut doc = test_document(SAMPLE);
    let err = editor
        .run_command(&mut doc, "move", &common::args(json!({"by": "pages"})))
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidArgs { .. }));
}

#[test]
fn test_move_stops_needs_a_class() {
    let editor = Editor::new();
    let mut doc = test_document(SAMPLE);
    set_regions(&mut doc, &[(3, 3)]);
    let err = editor
        .run_command(&mut doc, "move", &Args::new().with("by", "stops"))
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidArgs { .. }));
    assert_eq!(current_regions(&doc), regions(&[(3, 3)]));
}
