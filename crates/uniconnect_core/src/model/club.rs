//! Student clubs listed on the clubs screen.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Decorative icon key for a club card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubIcon {
    Camera,
    Code,
    Music,
    Palette,
    Dumbbell,
    Heart,
}

/// Student club the user may join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: RecordId,
    pub name: String,
    /// Free-form category; the filter bar is built from distinct values.
    pub category: String,
    pub members: u32,
    /// Label such as `Photo Walk - Dec 2`.
    pub next_event: String,
    pub description: String,
    pub icon: ClubIcon,
    /// Whether the club currently accepts members.
    pub is_open: bool,
    pub joined: bool,
}

impl Club {
    /// Whether the join button is enabled.
    pub fn can_join(&self) -> bool {
        self.is_open && !self.joined
    }

    /// Compact next-event label: the text before the first `-`, trimmed.
    pub fn next_event_short(&self) -> &str {
        self.next_event
            .split('-')
            .next()
            .unwrap_or_default()
            .trim()
    }
}

impl Record for Club {
    fn id(&self) -> RecordId {
        self.id
    }
}
