//! Notes document model and id-addressed block editing.
//!
//! # Responsibility
//! - Hold the ordered block list of one notes field.
//! - Provide the mutations the owning UI performs between parse and save.
//!
//! # Invariants
//! - Block order is caller-visible; no operation reorders implicitly.
//! - Editing never reassigns an existing block id.
//! - The format version of every document is `NOTES_FORMAT_VERSION`.

use crate::model::block::{BlockId, BlockKind, BlockType, NoteBlock};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage format tag written into every serialized document.
pub const NOTES_FORMAT_VERSION: u32 = 1;

/// Errors returned by id-addressed block edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEditError {
    /// No block with this id exists in the document.
    BlockNotFound(BlockId),
    /// Operation requires a checklist block.
    NotAChecklist(BlockId),
    /// Target index is past the end of the block list.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for BlockEditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlockNotFound(id) => write!(f, "block not found: {id}"),
            Self::NotAChecklist(id) => write!(f, "block is not a checklist item: {id}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "block index {index} out of range for {len} blocks")
            }
        }
    }
}

impl Error for BlockEditError {}

/// Block-based notes document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesDocument {
    blocks: Vec<NoteBlock>,
}

impl NotesDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from already ordered blocks.
    pub fn from_blocks(blocks: Vec<NoteBlock>) -> Self {
        Self { blocks }
    }

    /// Format version of this document.
    pub fn version(&self) -> u32 {
        NOTES_FORMAT_VERSION
    }

    pub fn blocks(&self) -> &[NoteBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finds a block by id.
    pub fn find(&self, id: &BlockId) -> Option<&NoteBlock> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    /// Returns the position of a block by id.
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| &block.id == id)
    }

    /// Appends one block at the end.
    pub fn push(&mut self, block: NoteBlock) {
        self.blocks.push(block);
    }

    /// Inserts `block` right after `anchor` and returns its index.
    pub fn insert_after(
        &mut self,
        anchor: &BlockId,
        block: NoteBlock,
    ) -> Result<usize, BlockEditError> {
        let index = self.require_position(anchor)? + 1;
        self.blocks.insert(index, block);
        Ok(index)
    }

    /// Removes one block and returns it.
    pub fn remove(&mut self, id: &BlockId) -> Result<NoteBlock, BlockEditError> {
        let index = self.require_position(id)?;
        Ok(self.blocks.remove(index))
    }

    /// Replaces block content, keeping variant and id.
    pub fn set_content(
        &mut self,
        id: &BlockId,
        content: impl Into<String>,
    ) -> Result<(), BlockEditError> {
        self.require_mut(id)?.set_content(content);
        Ok(())
    }

    /// Flips a checklist item and returns the new state.
    pub fn toggle_checked(&mut self, id: &BlockId) -> Result<bool, BlockEditError> {
        let block = self.require_mut(id)?;
        match &mut block.kind {
            BlockKind::Checklist { checked, .. } => {
                *checked = !*checked;
                Ok(*checked)
            }
            _ => Err(BlockEditError::NotAChecklist(id.clone())),
        }
    }

    /// Changes a block variant, keeping id and content.
    pub fn convert(&mut self, id: &BlockId, block_type: BlockType) -> Result<(), BlockEditError> {
        self.require_mut(id)?.convert(block_type);
        Ok(())
    }

    /// Moves a block to `to_index`, shifting the blocks in between.
    pub fn move_block(&mut self, id: &BlockId, to_index: usize) -> Result<(), BlockEditError> {
        let from = self.require_position(id)?;
        if to_index >= self.blocks.len() {
            return Err(BlockEditError::IndexOutOfRange {
                index: to_index,
                len: self.blocks.len(),
            });
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to_index, block);
        Ok(())
    }

    fn require_position(&self, id: &BlockId) -> Result<usize, BlockEditError> {
        self.position(id)
            .ok_or_else(|| BlockEditError::BlockNotFound(id.clone()))
    }

    fn require_mut(&mut self, id: &BlockId) -> Result<&mut NoteBlock, BlockEditError> {
        self.blocks
            .iter_mut()
            .find(|block| &block.id == id)
            .ok_or_else(|| BlockEditError::BlockNotFound(id.clone()))
    }
}

impl FromIterator<NoteBlock> for NotesDocument {
    fn from_iter<T: IntoIterator<Item = NoteBlock>>(iter: T) -> Self {
        Self::from_blocks(iter.into_iter().collect())
    }
}
