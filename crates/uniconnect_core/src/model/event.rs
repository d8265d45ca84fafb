//! Campus events listed on the events screen.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Event category used by the events filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Technology,
    Culture,
    Career,
    Sports,
}

impl EventCategory {
    /// Filter bar order.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Technology,
        EventCategory::Culture,
        EventCategory::Career,
        EventCategory::Sports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Culture => "culture",
            Self::Career => "career",
            Self::Sports => "sports",
        }
    }

    /// Title-cased label shown on event cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Culture => "Culture",
            Self::Career => "Career",
            Self::Sports => "Sports",
        }
    }
}

/// Scheduled campus event the student can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusEvent {
    pub id: RecordId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: u32,
    pub category: EventCategory,
    pub registered: bool,
}

impl Record for CampusEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}
