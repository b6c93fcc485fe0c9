//! Notes persistence boundary.
//!
//! # Responsibility
//! - Describe the "read string / persist string" collaborator the core needs.
//! - Provide an in-memory implementation for tests and local tools.
//!
//! # Invariants
//! - A store keeps values verbatim; it never parses or normalizes them.
//! - Reading a key that was never written yields `Ok(None)`.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a notes store backend.
#[derive(Debug)]
pub enum StoreError {
    /// Backend rejected or failed the operation.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "notes store failure: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Key-addressed storage of raw notes strings.
pub trait NotesStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Map-backed store kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotesStore {
    values: BTreeMap<String, String>,
}

impl InMemoryNotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one raw value, e.g. a legacy plain-text note.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl NotesStore for InMemoryNotesStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
