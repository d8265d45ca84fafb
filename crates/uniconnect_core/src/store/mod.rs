//! Reusable list-screen state primitives.
//!
//! # Responsibility
//! - Hold per-screen record collections with by-id mutation.
//! - Model confirmation-gated actions as an explicit stage/commit protocol.
//!
//! # Invariants
//! - All operations are total and synchronous.
//! - Derived views and aggregates are recomputed from the collection on
//!   every call; nothing is cached.

pub mod list;
pub mod pending;

pub use list::{ListStore, RecordFilter};
pub use pending::PendingSelection;
