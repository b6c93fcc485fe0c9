//! Checklist progress derived from a notes document.

use crate::model::block::BlockKind;
use crate::model::document::NotesDocument;
use serde::Serialize;

/// Checklist completion counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistStats {
    /// Number of checklist blocks.
    pub total: usize,
    /// Number of checked checklist blocks.
    pub completed: usize,
}

impl ChecklistStats {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// True when at least one checklist item exists and all are checked.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Counts checklist blocks and how many of them are checked.
pub fn checklist_stats(document: &NotesDocument) -> ChecklistStats {
    document
        .blocks()
        .iter()
        .fold(ChecklistStats::default(), |mut stats, block| {
            if let BlockKind::Checklist { checked, .. } = block.kind {
                stats.total += 1;
                if checked {
                    stats.completed += 1;
                }
            }
            stats
        })
}
