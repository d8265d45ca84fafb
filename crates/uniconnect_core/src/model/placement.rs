//! Job and internship openings on the placements screen.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Employment kind of a placement offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    Internship,
    #[serde(rename = "fulltime")]
    FullTime,
}

/// One recruiting opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: RecordId,
    pub company: String,
    pub role: String,
    pub location: String,
    pub salary: String,
    /// Relative label such as `2 days left`.
    pub deadline: String,
    #[serde(rename = "type")]
    pub kind: PlacementKind,
    pub eligibility: String,
    pub applied: bool,
}

impl Record for Placement {
    fn id(&self) -> RecordId {
        self.id
    }
}
