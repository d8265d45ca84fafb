//! Two-step confirmation protocol for gated actions.
//!
//! `stage(id)` opens the confirmation, then exactly one of `commit()` or
//! `cancel()` closes it. Staging again replaces the previous selection.

use crate::model::record::RecordId;

/// At most one record awaiting user confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingSelection {
    staged: Option<RecordId>,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the confirmation for `id`.
    pub fn stage(&mut self, id: RecordId) {
        self.staged = Some(id);
    }

    /// Record currently awaiting confirmation.
    pub fn staged(&self) -> Option<RecordId> {
        self.staged
    }

    pub fn is_open(&self) -> bool {
        self.staged.is_some()
    }

    /// Closes the confirmation and hands back the staged id for commit.
    pub fn commit(&mut self) -> Option<RecordId> {
        self.staged.take()
    }

    /// Closes the confirmation without acting.
    pub fn cancel(&mut self) {
        self.staged = None;
    }
}
