use notes_core::{
    checklist_stats, notes_to_plain_text, parse_notes, parse_notes_with_path, serialize_notes,
    BlockId, BlockKind, ChecklistStats, HeadingLevel, NoteBlock, NotesDocument, ParsePath,
};
use serde_json::json;

fn kinds(document: &NotesDocument) -> Vec<BlockKind> {
    document
        .blocks()
        .iter()
        .map(|block| block.kind.clone())
        .collect()
}

fn text(content: &str) -> BlockKind {
    BlockKind::Text {
        content: content.to_string(),
    }
}

fn checklist(content: &str, checked: bool) -> BlockKind {
    BlockKind::Checklist {
        content: content.to_string(),
        checked,
    }
}

fn sample_document() -> NotesDocument {
    NotesDocument::from_blocks(vec![
        NoteBlock::heading("Header"),
        NoteBlock::text("intro"),
        NoteBlock::checklist_checked("Task", true),
        NoteBlock::checklist(""),
        NoteBlock::bullet("Item"),
        NoteBlock::numbered("Step"),
        NoteBlock::heading_with_level("Deep", HeadingLevel::try_from(3).unwrap()),
    ])
}

#[test]
fn absent_and_blank_input_parse_to_empty_document() {
    for input in [None, Some(""), Some("   "), Some("\n\n")] {
        let document = parse_notes(input);
        assert!(document.is_empty(), "input {input:?} should be empty");
        assert_eq!(document.version(), 1);
    }
}

#[test]
fn constructed_document_round_trips_through_storage_form() {
    let document = sample_document();
    let stored = serialize_notes(&document);

    let (decoded, path) = parse_notes_with_path(Some(stored.as_str()));
    assert_eq!(path, ParsePath::Stored);
    assert_eq!(decoded, document);
}

#[test]
fn storage_form_is_stable_across_decode_and_encode() {
    let stored = serialize_notes(&sample_document());
    let again = serialize_notes(&parse_notes(Some(stored.as_str())));
    assert_eq!(again, stored);
}

#[test]
fn plain_text_lines_detect_checklists_only() {
    let document = parse_notes(Some("[x] Done\n[ ] Todo\nPlain"));
    assert_eq!(
        kinds(&document),
        vec![
            checklist("Done", true),
            checklist("Todo", false),
            text("Plain"),
        ]
    );
    assert_eq!(
        checklist_stats(&document),
        ChecklistStats {
            total: 2,
            completed: 1,
        }
    );
}

#[test]
fn plain_text_keeps_whitespace_lines_and_empty_checklists() {
    let document = parse_notes(Some("first\n   \n[ ] \n  indented  "));
    assert_eq!(
        kinds(&document),
        vec![
            text("first"),
            text("   "),
            checklist("", false),
            text("  indented  "),
        ]
    );
}

#[test]
fn plain_text_blocks_get_distinct_ids() {
    let document = parse_notes(Some("a\nb\n[x] c"));
    let ids = document
        .blocks()
        .iter()
        .map(|block| block.id.clone())
        .collect::<std::collections::BTreeSet<_>>();
    assert_eq!(ids.len(), 3);
}

#[test]
fn display_text_renders_each_block_type() {
    let plain = notes_to_plain_text(&sample_document());
    assert_eq!(
        plain,
        "## Header\nintro\n[x] Task\n[ ] \n• Item\n- Step\n### Deep"
    );
}

#[test]
fn display_text_reparses_lossily() {
    let plain = notes_to_plain_text(&sample_document());
    let reparsed = parse_notes(Some(plain.as_str()));

    assert_eq!(
        kinds(&reparsed),
        vec![
            text("## Header"),
            text("intro"),
            checklist("Task", true),
            checklist("", false),
            text("• Item"),
            text("- Step"),
            text("### Deep"),
        ]
    );
    assert_ne!(reparsed, sample_document());
}

#[test]
fn stored_payload_keeps_foreign_ids_and_applies_defaults() {
    let input = json!({
        "version": 1,
        "blocks": [
            { "id": "legacy-1", "type": "heading", "content": "Title" },
            { "id": "legacy-2", "type": "checklist", "content": "Task" },
            { "id": "legacy-3", "type": "text", "content": "Body", "checked": true }
        ]
    })
    .to_string();

    let (document, path) = parse_notes_with_path(Some(input.as_str()));
    assert_eq!(path, ParsePath::Stored);
    assert_eq!(document.blocks()[0].id, BlockId::from("legacy-1"));
    assert_eq!(
        kinds(&document),
        vec![
            BlockKind::Heading {
                content: "Title".to_string(),
                level: HeadingLevel::default(),
            },
            checklist("Task", false),
            text("Body"),
        ]
    );
}

#[test]
fn unrecognized_payloads_fall_back_to_plain_text() {
    let cases = [
        json!({ "version": 2, "blocks": [] }).to_string(),
        json!({ "version": "1", "blocks": [] }).to_string(),
        json!({ "version": 1, "blocks": {} }).to_string(),
        "[1, 2, 3]".to_string(),
        "null".to_string(),
        "{not json".to_string(),
    ];

    for input in cases {
        let (document, path) = parse_notes_with_path(Some(input.as_str()));
        assert_eq!(path, ParsePath::PlainText, "input `{input}`");
        assert_eq!(kinds(&document), vec![text(input.as_str())]);
    }
}

fn parse_stored(value: serde_json::Value) -> NotesDocument {
    let input = value.to_string();
    let (document, path) = parse_notes_with_path(Some(input.as_str()));
    assert_eq!(path, ParsePath::Stored, "input `{input}`");
    document
}

#[test]
fn stored_block_without_id_gets_minted_id_and_keeps_siblings() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [
            { "id": "a", "type": "checklist", "content": "milk", "checked": true },
            { "type": "text", "content": "no id" }
        ]
    }));

    assert_eq!(document.blocks()[0].id, BlockId::from("a"));
    assert!(!document.blocks()[1].id.as_str().is_empty());
    assert_ne!(document.blocks()[1].id, BlockId::from("a"));
    assert_eq!(kinds(&document), vec![checklist("milk", true), text("no id")]);
    assert_eq!(
        checklist_stats(&document),
        ChecklistStats {
            total: 1,
            completed: 1,
        }
    );
}

#[test]
fn stored_block_with_null_or_missing_content_reads_as_empty() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [
            { "id": "a", "type": "checklist", "content": null, "checked": false },
            { "id": "b", "type": "bullet" }
        ]
    }));

    assert_eq!(
        kinds(&document),
        vec![checklist("", false), BlockKind::Bullet { content: String::new() }]
    );
}

#[test]
fn stored_block_with_unknown_type_becomes_text() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [
            { "id": "q", "type": "quote", "content": "kept" },
            { "id": "d", "type": "divider" },
            { "id": "n", "content": "untyped" }
        ]
    }));

    assert_eq!(document.blocks()[0].id, BlockId::from("q"));
    assert_eq!(kinds(&document), vec![text("kept"), text(""), text("untyped")]);
}

#[test]
fn stored_heading_with_out_of_range_level_uses_default() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [
            { "id": "h1", "type": "heading", "content": "Four", "level": 4 },
            { "id": "h2", "type": "heading", "content": "Zero", "level": 0 },
            { "id": "h3", "type": "heading", "content": "Big", "level": 300 },
            { "id": "h4", "type": "heading", "content": "One", "level": 1 }
        ]
    }));

    let levels = document
        .blocks()
        .iter()
        .map(|block| block.level().map(HeadingLevel::get))
        .collect::<Vec<_>>();
    assert_eq!(levels, vec![Some(2), Some(2), Some(2), Some(1)]);
}

#[test]
fn stored_type_tags_match_case_insensitively() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [{ "id": "c", "type": "Checklist", "content": "task", "checked": true }]
    }));

    assert_eq!(kinds(&document), vec![checklist("task", true)]);
}

#[test]
fn repaired_stored_document_resaves_without_nesting() {
    let document = parse_stored(json!({
        "version": 1,
        "blocks": [
            { "id": "a", "type": "checklist", "content": "milk", "checked": true },
            { "id": "b", "type": "divider", "content": null }
        ]
    }));

    assert_eq!(
        serialize_notes(&document),
        r#"{"version":1,"blocks":[{"id":"a","type":"checklist","content":"milk","checked":true},{"id":"b","type":"text","content":""}]}"#
    );
}
