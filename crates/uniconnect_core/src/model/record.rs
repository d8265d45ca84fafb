//! Shared record contract for list screens.
//!
//! # Invariants
//! - `id()` is unique within one collection and never changes.

/// Stable identifier of one record within its screen collection.
///
/// Seed data uses small sequential integers starting at 1.
pub type RecordId = u32;

/// One list item rendered by a list screen.
pub trait Record {
    /// Stable identity used by update/remove actions.
    fn id(&self) -> RecordId;
}
