//! Notes field use-case service.
//!
//! # Responsibility
//! - Load a stored notes string into a document and save it back.
//! - Offer read projections (display text, checklist stats) per key.
//!
//! # Invariants
//! - Loading never fails on content; only store failures surface as errors.
//! - Saving always writes the storage form produced by `serialize_notes`.
//! - `update` persists only when the edit closure succeeds.

use crate::codec::parse::parse_notes;
use crate::codec::serialize::{notes_to_plain_text, serialize_notes};
use crate::model::document::{BlockEditError, NotesDocument};
use crate::stats::{checklist_stats, ChecklistStats};
use crate::store::{NotesStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for notes use-cases.
#[derive(Debug)]
pub enum NotesServiceError {
    /// Key is empty after trimming.
    EmptyKey,
    /// Persistence collaborator failure.
    Store(StoreError),
    /// Block edit rejected by the document.
    Edit(BlockEditError),
}

impl Display for NotesServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "notes key cannot be empty"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Edit(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotesServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Edit(err) => Some(err),
            Self::EmptyKey => None,
        }
    }
}

impl From<StoreError> for NotesServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<BlockEditError> for NotesServiceError {
    fn from(value: BlockEditError) -> Self {
        Self::Edit(value)
    }
}

/// Notes service facade over a store implementation.
pub struct NotesService<S: NotesStore> {
    store: S,
}

impl<S: NotesStore> NotesService<S> {
    /// Creates a service using the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the document stored under `key`; absent values load as empty.
    pub fn load(&self, key: &str) -> Result<NotesDocument, NotesServiceError> {
        let key = normalize_key(key)?;
        let raw = self.store.read(key).inspect_err(|err| {
            error!("event=notes_load module=service status=error key={key} error={err}");
        })?;
        Ok(parse_notes(raw.as_deref()))
    }

    /// Writes the storage form of `document` under `key`.
    pub fn save(&mut self, key: &str, document: &NotesDocument) -> Result<(), NotesServiceError> {
        let key = normalize_key(key)?;
        let encoded = serialize_notes(document);
        self.store.write(key, encoded.as_str()).inspect_err(|err| {
            error!("event=notes_save module=service status=error key={key} error={err}");
        })?;
        info!(
            "event=notes_save module=service status=ok key={key} blocks={} bytes={}",
            document.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Loads, edits and saves one document.
    ///
    /// Nothing is written when `edit` returns an error.
    pub fn update<T, F>(&mut self, key: &str, edit: F) -> Result<T, NotesServiceError>
    where
        F: FnOnce(&mut NotesDocument) -> Result<T, BlockEditError>,
    {
        let mut document = self.load(key)?;
        let output = edit(&mut document)?;
        self.save(key, &document)?;
        Ok(output)
    }

    /// Display text of the document under `key`.
    pub fn plain_text(&self, key: &str) -> Result<String, NotesServiceError> {
        Ok(notes_to_plain_text(&self.load(key)?))
    }

    /// Checklist progress of the document under `key`.
    pub fn checklist_stats(&self, key: &str) -> Result<ChecklistStats, NotesServiceError> {
        Ok(checklist_stats(&self.load(key)?))
    }
}

fn normalize_key(key: &str) -> Result<&str, NotesServiceError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(NotesServiceError::EmptyKey);
    }
    Ok(trimmed)
}
