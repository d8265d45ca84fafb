//! Announcements on the notice board.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Severity of a notice, drives card color and the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Urgent,
    Info,
    Success,
}

/// One campus announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub posted_by: String,
    pub date: String,
    pub pinned: bool,
    pub bookmarked: bool,
}

impl Record for Notice {
    fn id(&self) -> RecordId {
        self.id
    }
}
