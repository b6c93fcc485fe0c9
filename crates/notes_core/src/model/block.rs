//! Note block domain model.
//!
//! # Responsibility
//! - Define the closed set of block variants a notes document is built from.
//! - Provide the only sanctioned constructors, each minting a fresh `BlockId`.
//!
//! # Invariants
//! - `checked` exists only on checklist blocks; `level` only on headings.
//! - Heading level is always within `1..=3`.
//! - A block keeps its `id` for its whole lifetime, including variant changes.
//!
//! # See also
//! - `crate::codec` for the storage/display encodings of blocks.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque block identifier used for UI reconciliation.
///
/// Freshly minted ids are UUID v4 strings. Ids decoded from storage are kept
/// verbatim, so older payloads with non-UUID ids still pass through intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Mints a new process-unique identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Heading depth, restricted to `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Returns the numeric depth.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidHeadingLevel(value))
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(value: HeadingLevel) -> Self {
        value.0
    }
}

/// Rejected heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHeadingLevel(pub u8);

impl Display for InvalidHeadingLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "heading level {} is out of range {}..={}",
            self.0,
            HeadingLevel::MIN,
            HeadingLevel::MAX
        )
    }
}

impl Error for InvalidHeadingLevel {}

/// Variant tag of a block, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Text,
    Heading,
    Checklist,
    Bullet,
    Numbered,
}

impl BlockType {
    /// Wire tag used in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Checklist => "checklist",
            Self::Bullet => "bullet",
            Self::Numbered => "numbered",
        }
    }
}

/// Tags match after trimming and ASCII lowercasing, for host input and
/// stored payloads alike.
impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "heading" => Ok(Self::Heading),
            "checklist" => Ok(Self::Checklist),
            "bullet" => Ok(Self::Bullet),
            "numbered" => Ok(Self::Numbered),
            _ => Err(UnknownBlockType(value.to_string())),
        }
    }
}

/// Rejected block type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBlockType(pub String);

impl Display for UnknownBlockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown block type `{}`; expected text|heading|checklist|bullet|numbered",
            self.0
        )
    }
}

impl Error for UnknownBlockType {}

/// Variant payload of a block.
///
/// Serialized internally tagged as `type`, so a block encodes as
/// `{"id": .., "type": "checklist", "content": .., "checked": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Free text line.
    Text {
        content: String,
    },
    /// Section heading.
    Heading {
        content: String,
        level: HeadingLevel,
    },
    /// Checkable task line.
    Checklist {
        content: String,
        checked: bool,
    },
    /// Unordered list item.
    Bullet {
        content: String,
    },
    /// Ordered list item.
    Numbered {
        content: String,
    },
}

impl BlockKind {
    /// Returns the variant tag.
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Text { .. } => BlockType::Text,
            Self::Heading { .. } => BlockType::Heading,
            Self::Checklist { .. } => BlockType::Checklist,
            Self::Bullet { .. } => BlockType::Bullet,
            Self::Numbered { .. } => BlockType::Numbered,
        }
    }

    /// Builds the default payload of `block_type` around `content`.
    pub fn with_content(block_type: BlockType, content: String) -> Self {
        match block_type {
            BlockType::Text => Self::Text { content },
            BlockType::Heading => Self::Heading {
                content,
                level: HeadingLevel::default(),
            },
            BlockType::Checklist => Self::Checklist {
                content,
                checked: false,
            },
            BlockType::Bullet => Self::Bullet { content },
            BlockType::Numbered => Self::Numbered { content },
        }
    }

    fn content(&self) -> &str {
        match self {
            Self::Text { content }
            | Self::Heading { content, .. }
            | Self::Checklist { content, .. }
            | Self::Bullet { content }
            | Self::Numbered { content } => content,
        }
    }

    fn content_mut(&mut self) -> &mut String {
        match self {
            Self::Text { content }
            | Self::Heading { content, .. }
            | Self::Checklist { content, .. }
            | Self::Bullet { content }
            | Self::Numbered { content } => content,
        }
    }
}

/// One semantic unit of a notes document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteBlock {
    /// Reconciliation id, stable for the block lifetime.
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl NoteBlock {
    /// Creates a block of `kind` with a freshly minted id.
    pub fn new(kind: BlockKind) -> Self {
        Self::with_id(BlockId::generate(), kind)
    }

    /// Creates a block with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally. The
    /// caller is responsible for id uniqueness within one document.
    pub fn with_id(id: BlockId, kind: BlockKind) -> Self {
        Self { id, kind }
    }

    /// Plain text block.
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Text {
            content: content.into(),
        })
    }

    /// Unchecked checklist block.
    pub fn checklist(content: impl Into<String>) -> Self {
        Self::checklist_checked(content, false)
    }

    /// Checklist block with explicit state.
    pub fn checklist_checked(content: impl Into<String>, checked: bool) -> Self {
        Self::new(BlockKind::Checklist {
            content: content.into(),
            checked,
        })
    }

    /// Level 2 heading block.
    pub fn heading(content: impl Into<String>) -> Self {
        Self::heading_with_level(content, HeadingLevel::default())
    }

    /// Heading block with explicit level.
    pub fn heading_with_level(content: impl Into<String>, level: HeadingLevel) -> Self {
        Self::new(BlockKind::Heading {
            content: content.into(),
            level,
        })
    }

    /// Bullet list block.
    pub fn bullet(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Bullet {
            content: content.into(),
        })
    }

    /// Numbered list block.
    pub fn numbered(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Numbered {
            content: content.into(),
        })
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    pub fn content(&self) -> &str {
        self.kind.content()
    }

    /// Replaces the textual payload, keeping variant and id.
    pub fn set_content(&mut self, content: impl Into<String>) {
        *self.kind.content_mut() = content.into();
    }

    /// Returns the checklist state, or `None` for other variants.
    pub fn checked(&self) -> Option<bool> {
        match self.kind {
            BlockKind::Checklist { checked, .. } => Some(checked),
            _ => None,
        }
    }

    /// Returns the heading level, or `None` for other variants.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self.kind {
            BlockKind::Heading { level, .. } => Some(level),
            _ => None,
        }
    }

    /// Changes the variant in place, keeping id and content.
    ///
    /// Converting to the current variant is a no-op, so checklist state and
    /// heading level survive a same-type conversion.
    pub fn convert(&mut self, block_type: BlockType) {
        if self.block_type() == block_type {
            return;
        }
        let content = std::mem::take(self.kind.content_mut());
        self.kind = BlockKind::with_content(block_type, content);
    }
}
