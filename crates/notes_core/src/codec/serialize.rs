//! Storage and display encodings of notes documents.

use crate::model::block::{BlockKind, NoteBlock};
use crate::model::document::NotesDocument;
use serde::Serialize;

/// Glyph prefixed to bullet blocks in display text.
pub const BULLET_GLYPH: char = '•';

#[derive(Serialize)]
struct StoredDocument<'a> {
    version: u32,
    blocks: &'a [NoteBlock],
}

/// Encodes a document into its storage string.
///
/// Output shape: `{"version":1,"blocks":[{"id":..,"type":..,"content":..}]}`
/// with `checked` on checklist blocks and `level` on headings. The document
/// is written exactly as given.
pub fn serialize_notes(document: &NotesDocument) -> String {
    let stored = StoredDocument {
        version: document.version(),
        blocks: document.blocks(),
    };
    // Only strings, bools and small integers reach the encoder.
    serde_json::to_string(&stored).expect("notes document is always JSON-encodable")
}

/// Renders a document as display text, one line per block.
///
/// Not a storage format: reparsing only recovers checklist lines, headings,
/// bullets and numbered items come back as text blocks. Numbered items are
/// written with a `-` marker rather than their position.
pub fn notes_to_plain_text(document: &NotesDocument) -> String {
    document
        .blocks()
        .iter()
        .map(block_to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_to_line(block: &NoteBlock) -> String {
    match &block.kind {
        BlockKind::Checklist { content, checked } => {
            let marker = if *checked { 'x' } else { ' ' };
            format!("[{marker}] {content}")
        }
        BlockKind::Heading { content, level } => {
            format!("{} {content}", "#".repeat(usize::from(level.get())))
        }
        BlockKind::Bullet { content } => format!("{BULLET_GLYPH} {content}"),
        BlockKind::Numbered { content } => format!("- {content}"),
        BlockKind::Text { content } => content.clone(),
    }
}
