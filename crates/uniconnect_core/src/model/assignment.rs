//! Coursework tracked on the assignments screen.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Upper bound of `Assignment::progress`.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Progress buttons offered for active assignments.
pub const PROGRESS_PRESETS: [u8; 4] = [25, 50, 75, 100];

/// One piece of coursework with completion tracking.
///
/// # Invariants
/// - `progress` stays within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    pub due_date: String,
    pub days_left: u32,
    pub progress: u8,
    pub urgent: bool,
    pub completed: bool,
}

impl Record for Assignment {
    fn id(&self) -> RecordId {
        self.id
    }
}
