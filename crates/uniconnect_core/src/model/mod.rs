//! Record types rendered by the list screens.
//!
//! # Responsibility
//! - Define one plain data type per list screen.
//! - Keep every record addressable through the shared `Record` contract.
//!
//! # Invariants
//! - Records carry no behavior beyond field access and derived labels.
//! - Mutation happens only through `store::ListStore` by id.

pub mod assignment;
pub mod club;
pub mod event;
pub mod feed;
pub mod note;
pub mod notice;
pub mod placement;
pub mod record;
