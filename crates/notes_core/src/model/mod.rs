//! Notes domain model.
//!
//! # Responsibility
//! - Define the block-based document shape shared by parser, serializer and UI.
//! - Keep variant-specific fields on their variants only.
//!
//! # Invariants
//! - Every block is identified by a `BlockId` minted at construction time.
//! - Documents carry format version `1`.

pub mod block;
pub mod document;
