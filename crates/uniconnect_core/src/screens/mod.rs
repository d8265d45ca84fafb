//! Screen state for every page of the app.
//!
//! # Responsibility
//! - One mounted-state type per page, seeded fresh on `mount()`.
//! - Expose filters, actions and header counters as plain methods.
//!
//! # Invariants
//! - Every action touches at most one record.
//! - Header counters are derived on each call.

pub mod assignments;
pub mod clubs;
pub mod dashboard;
pub mod events;
pub mod feed;
pub mod nav;
pub mod notes;
pub mod notes_sharing;
pub mod notices;
pub mod placements;
pub mod profile;

pub use assignments::AssignmentsScreen;
pub use clubs::ClubsScreen;
pub use dashboard::DashboardScreen;
pub use events::EventsScreen;
pub use feed::EventsFeedScreen;
pub use nav::{bottom_nav, NavItem};
pub use notes::NotesScreen;
pub use notes_sharing::NotesSharingScreen;
pub use notices::NoticeBoardScreen;
pub use placements::PlacementsScreen;
pub use profile::ProfileScreen;
