//! FFI use-case API for the UI host.
//!
//! # Responsibility
//! - Expose notes parse/render/edit calls as sync string-in, string-out functions.
//! - Keep error semantics simple: envelopes and messages, never panics.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every returned document string is in storage form (`version: 1` JSON).

use notes_core::{
    checklist_stats, core_version as core_version_inner, init_logging as init_logging_inner,
    logging_status as logging_status_inner,
    notes_to_plain_text, parse_notes, ping as ping_inner, serialize_notes, BlockEditError,
    BlockId, BlockKind, BlockType, NoteBlock, NotesDocument,
};
use log::warn;

/// Minimal health-check API for host smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Reports the active logging config as `level@log_dir`.
///
/// # FFI contract
/// - Returns empty string when logging has not been initialized.
#[flutter_rust_bridge::frb(sync)]
pub fn logging_status() -> String {
    logging_status_inner()
        .map(|config| config.to_string())
        .unwrap_or_default()
}

/// Checklist progress envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesStatsResponse {
    pub total: u32,
    pub completed: u32,
}

/// Result envelope for document edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesEditResponse {
    /// Whether the edit was applied.
    pub ok: bool,
    /// Updated storage string on success.
    pub stored: Option<String>,
    /// Id of the created/affected block on success.
    pub block_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NotesEditResponse {
    fn success(document: &NotesDocument, block_id: &BlockId) -> Self {
        Self {
            ok: true,
            stored: Some(serialize_notes(document)),
            block_id: Some(block_id.to_string()),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            stored: None,
            block_id: None,
            message: message.into(),
        }
    }
}

/// Normalizes a stored notes value into storage form.
///
/// Legacy plain text is upgraded; blank input yields an empty document.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_parse(input: Option<String>) -> String {
    serialize_notes(&parse_notes(input.as_deref()))
}

/// Renders a stored notes value as display text.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_plain_text(stored: Option<String>) -> String {
    notes_to_plain_text(&parse_notes(stored.as_deref()))
}

/// Counts checklist items of a stored notes value.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_checklist_stats(stored: Option<String>) -> NotesStatsResponse {
    let stats = checklist_stats(&parse_notes(stored.as_deref()));
    NotesStatsResponse {
        total: saturate_u32(stats.total),
        completed: saturate_u32(stats.completed),
    }
}

/// Appends a new block of `block_type` to a stored notes value.
///
/// `block_type` is one of `text|heading|checklist|bullet|numbered`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_append_block(
    stored: Option<String>,
    block_type: String,
    content: String,
) -> NotesEditResponse {
    let block_type = match block_type.parse::<BlockType>() {
        Ok(value) => value,
        Err(err) => {
            warn!("event=ffi_edit module=ffi status=error op=notes_append_block reason=unknown_type");
            return NotesEditResponse::failure(format!("notes_append_block failed: {err}"));
        }
    };
    let mut document = parse_notes(stored.as_deref());
    let block = NoteBlock::new(BlockKind::with_content(block_type, content));
    let block_id = block.id.clone();
    document.push(block);
    NotesEditResponse::success(&document, &block_id)
}

/// Toggles one checklist block of a stored notes value.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_checked(stored: Option<String>, block_id: String) -> NotesEditResponse {
    edit_stored(stored, block_id, "notes_toggle_checked", |document, id| {
        document.toggle_checked(id).map(|_| ())
    })
}

/// Removes one block from a stored notes value.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_remove_block(stored: Option<String>, block_id: String) -> NotesEditResponse {
    edit_stored(stored, block_id, "notes_remove_block", |document, id| {
        document.remove(id).map(|_| ())
    })
}

fn edit_stored<F>(
    stored: Option<String>,
    block_id: String,
    operation: &str,
    edit: F,
) -> NotesEditResponse
where
    F: FnOnce(&mut NotesDocument, &BlockId) -> Result<(), BlockEditError>,
{
    let mut document = parse_notes(stored.as_deref());
    let id = BlockId::from(block_id);
    match edit(&mut document, &id) {
        Ok(()) => NotesEditResponse::success(&document, &id),
        Err(err) => {
            warn!("event=ffi_edit module=ffi status=error op={operation} block_id={id}");
            NotesEditResponse::failure(format!("{operation} failed: {err}"))
        }
    }
}

fn saturate_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
