//! Activity feed items (deadlines, hackathons, club calls, lectures).

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Source of a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    Assignment,
    Hackathon,
    Club,
    Event,
}

/// Visual priority of an open feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedPriority {
    High,
    Medium,
    Low,
}

/// One entry of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: FeedKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub time: String,
    pub priority: Option<FeedPriority>,
    pub completed: bool,
}

impl Record for FeedItem {
    fn id(&self) -> RecordId {
        self.id
    }
}
