//! Study notes shown on the notes pages.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Uploaded study material on the notes screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    pub uploaded_by: String,
    pub downloads: u32,
    /// Average rating out of 5.
    pub rating: f32,
    /// Display label such as `PDF` or `DOCX`.
    pub file_type: String,
}

impl Record for Note {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Peer-shared note on the notes-sharing screen.
///
/// Collection order is upload recency: earlier entries are newer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedNote {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    pub uploaded_by: String,
    pub downloads: u32,
    /// Relative label such as `2 days ago`.
    pub upload_date: String,
    pub rating: f32,
}

impl Record for SharedNote {
    fn id(&self) -> RecordId {
        self.id
    }
}
