//! String encodings of notes documents.
//!
//! # Responsibility
//! - Decode a stored notes string (JSON or legacy plain text) into a document.
//! - Encode a document into its storage form (JSON) and display form (text).
//!
//! # Invariants
//! - Decoding is total: malformed input degrades to plain text, never errors.
//! - Encoding is deterministic and never reorders or renames blocks.
//! - Display text is lossy; only checklist syntax survives a reparse.

pub mod parse;
pub mod serialize;
