//! Core logic for block-based notes fields.
//! This crate owns the document model and its string encodings.

pub mod codec;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;

pub use codec::parse::{parse_notes, parse_notes_with_path, parse_plain_text, ParsePath};
pub use codec::serialize::{notes_to_plain_text, serialize_notes, BULLET_GLYPH};
pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::block::{
    BlockId, BlockKind, BlockType, HeadingLevel, InvalidHeadingLevel, NoteBlock, UnknownBlockType,
};
pub use model::document::{BlockEditError, NotesDocument, NOTES_FORMAT_VERSION};
pub use service::{NotesService, NotesServiceError};
pub use stats::{checklist_stats, ChecklistStats};
pub use store::{InMemoryNotesStore, NotesStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
