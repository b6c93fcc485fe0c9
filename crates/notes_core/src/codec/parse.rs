//! Stored notes string decoding.
//!
//! Input precedence:
//! 1. absent or blank input -> empty document
//! 2. JSON with `version == 1` and a `blocks` array -> one block per entry
//! 3. anything else -> one block per `\n`-separated line

use crate::model::block::{BlockId, BlockKind, BlockType, HeadingLevel, NoteBlock};
use crate::model::document::{NotesDocument, NOTES_FORMAT_VERSION};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static CHECKLIST_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[([ xX])\]\s*(.*)$").expect("valid checklist regex"));

/// Which decode branch produced a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePath {
    /// Input was absent or blank.
    Empty,
    /// Input was a previously stored JSON document.
    Stored,
    /// Input was reinterpreted line by line.
    PlainText,
}

impl ParsePath {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Stored => "stored",
            Self::PlainText => "plain_text",
        }
    }
}

/// Parses a stored notes value into a document.
///
/// Never fails. Content that is not a stored document of the expected shape
/// is kept as plain text so pre-existing free-form notes are not lost.
pub fn parse_notes(input: Option<&str>) -> NotesDocument {
    parse_notes_with_path(input).0
}

/// Same as [`parse_notes`], also reporting the decode branch taken.
pub fn parse_notes_with_path(input: Option<&str>) -> (NotesDocument, ParsePath) {
    let Some(input) = input else {
        return (NotesDocument::new(), ParsePath::Empty);
    };
    if input.trim().is_empty() {
        return (NotesDocument::new(), ParsePath::Empty);
    }

    if let Some(document) = decode_stored(input) {
        return (document, ParsePath::Stored);
    }

    let document = parse_plain_text(input);
    debug!(
        "event=notes_parse module=codec status=ok path=plain_text bytes={} blocks={}",
        input.len(),
        document.len()
    );
    (document, ParsePath::PlainText)
}

/// Interprets `input` as legacy plain text, one block per line.
///
/// Only checklist lines (`[x]`, `[X]`, `[ ]`) are recognized; every other line,
/// including heading- or bullet-looking ones, becomes a text block verbatim.
pub fn parse_plain_text(input: &str) -> NotesDocument {
    input.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> NoteBlock {
    match CHECKLIST_LINE_RE.captures(line) {
        Some(caps) => {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2).map_or("", |m| m.as_str());
            NoteBlock::checklist_checked(content, marker.eq_ignore_ascii_case("x"))
        }
        None => NoteBlock::text(line),
    }
}

fn decode_stored(input: &str) -> Option<NotesDocument> {
    let value = serde_json::from_str::<Value>(input).ok()?;
    // Numeric compare so `1.0` is accepted like `1`.
    let version = value.get("version").and_then(Value::as_f64)?;
    if version != f64::from(NOTES_FORMAT_VERSION) {
        return None;
    }
    let blocks = value.get("blocks").and_then(Value::as_array)?;

    let mut repaired = 0usize;
    let document = blocks
        .iter()
        .map(|entry| {
            let (block, exact) = decode_block(entry);
            if !exact {
                repaired += 1;
            }
            block
        })
        .collect::<NotesDocument>();
    if repaired > 0 {
        debug!(
            "event=notes_parse module=codec status=ok path=stored blocks={} repaired={}",
            document.len(),
            repaired
        );
    }
    Some(document)
}

/// Decodes one stored block, filling gaps instead of rejecting it.
///
/// - missing or non-string `id` -> freshly minted id (numbers keep their text)
/// - missing or non-string `content` -> `""`
/// - unknown `type` -> text block with the same content
/// - missing `checked` -> `false`; missing or out-of-range `level` -> 2
///
/// Returns the block and whether it was stored exactly in that shape.
fn decode_block(entry: &Value) -> (NoteBlock, bool) {
    let Some(fields) = entry.as_object() else {
        let content = entry.as_str().unwrap_or_default();
        return (NoteBlock::text(content), false);
    };
    let mut exact = true;

    let id = match fields.get("id") {
        Some(Value::String(id)) => BlockId::from(id.as_str()),
        Some(Value::Number(id)) => {
            exact = false;
            BlockId::from(id.to_string())
        }
        _ => {
            exact = false;
            BlockId::generate()
        }
    };

    let content = match fields.get("content") {
        Some(Value::String(content)) => content.clone(),
        _ => {
            exact = false;
            String::new()
        }
    };

    let block_type = fields
        .get("type")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse::<BlockType>().ok())
        .unwrap_or_else(|| {
            exact = false;
            BlockType::Text
        });

    let kind = match block_type {
        BlockType::Checklist => BlockKind::Checklist {
            content,
            checked: fields.get("checked").and_then(Value::as_bool).unwrap_or_else(|| {
                exact = false;
                false
            }),
        },
        BlockType::Heading => BlockKind::Heading {
            content,
            level: fields
                .get("level")
                .and_then(Value::as_u64)
                .and_then(|level| u8::try_from(level).ok())
                .and_then(|level| HeadingLevel::try_from(level).ok())
                .unwrap_or_else(|| {
                    exact = false;
                    HeadingLevel::default()
                }),
        },
        other => BlockKind::with_content(other, content),
    };

    (NoteBlock::with_id(id, kind), exact)
}
