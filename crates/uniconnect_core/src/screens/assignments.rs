//! Assignments screen: progress tracking and completion toggles.
//!
//! # Invariants
//! - Setting progress marks an assignment completed iff progress is 100.
//! - Completing sets progress to 100; re-opening keeps the old progress.

use crate::model::assignment::{Assignment, PROGRESS_COMPLETE};
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use log::debug;

/// Partition of the assignments list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Active,
    Completed,
}

impl RecordFilter<Assignment> for AssignmentStatus {
    fn matches(&self, record: &Assignment) -> bool {
        match self {
            Self::Active => !record.completed,
            Self::Completed => record.completed,
        }
    }
}

/// Header counters of the assignments screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentStats {
    pub active: usize,
    pub completed: usize,
    /// Urgent assignments that are not yet completed.
    pub urgent: usize,
}

/// Mounted assignments screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentsScreen {
    assignments: ListStore<Assignment>,
}

impl Default for AssignmentsScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl AssignmentsScreen {
    pub fn mount() -> Self {
        Self {
            assignments: ListStore::from_seed(seed::assignments()),
        }
    }

    pub fn assignments(&self) -> &ListStore<Assignment> {
        &self.assignments
    }

    pub fn active(&self) -> Vec<&Assignment> {
        self.assignments.view(&AssignmentStatus::Active)
    }

    pub fn completed(&self) -> Vec<&Assignment> {
        self.assignments.view(&AssignmentStatus::Completed)
    }

    /// Sets progress of `id`, clamped to 100.
    pub fn update_progress(&mut self, id: RecordId, progress: u8) -> bool {
        let progress = progress.min(PROGRESS_COMPLETE);
        let found = self.assignments.update(id, |assignment| {
            assignment.progress = progress;
            assignment.completed = progress == PROGRESS_COMPLETE;
        });
        debug!("event=assignment_progress module=assignments id={id} progress={progress} found={found}");
        found
    }

    /// Flips completion of `id`.
    pub fn toggle_complete(&mut self, id: RecordId) -> bool {
        let found = self.assignments.update(id, |assignment| {
            if !assignment.completed {
                assignment.progress = PROGRESS_COMPLETE;
            }
            assignment.completed = !assignment.completed;
        });
        debug!("event=assignment_toggle module=assignments id={id} found={found}");
        found
    }

    pub fn stats(&self) -> AssignmentStats {
        AssignmentStats {
            active: self.assignments.count(&AssignmentStatus::Active),
            completed: self.assignments.count(&AssignmentStatus::Completed),
            urgent: self
                .assignments
                .count(&|assignment: &Assignment| assignment.urgent && !assignment.completed),
        }
    }
}
