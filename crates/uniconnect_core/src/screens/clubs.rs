//! Clubs screen: category filter and confirmation-gated joining.

use crate::model::club::Club;
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, PendingSelection, RecordFilter};
use log::debug;

/// Category bar selection. Categories come from the data itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClubFilter {
    #[default]
    All,
    Category(String),
}

impl RecordFilter<Club> for ClubFilter {
    fn matches(&self, record: &Club) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == *category,
        }
    }
}

/// Header counters of the clubs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubStats {
    pub total: usize,
    pub joined: usize,
    pub open: usize,
}

/// Mounted clubs screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubsScreen {
    clubs: ListStore<Club>,
    filter: ClubFilter,
    pending_join: PendingSelection,
}

impl Default for ClubsScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl ClubsScreen {
    pub fn mount() -> Self {
        Self {
            clubs: ListStore::from_seed(seed::clubs()),
            filter: ClubFilter::All,
            pending_join: PendingSelection::new(),
        }
    }

    pub fn clubs(&self) -> &ListStore<Club> {
        &self.clubs
    }

    /// Distinct categories in first-seen order, without the `all` entry.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for club in self.clubs.items() {
            if !categories.contains(&club.category.as_str()) {
                categories.push(club.category.as_str());
            }
        }
        categories
    }

    pub fn filter(&self) -> &ClubFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ClubFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Club> {
        self.clubs.view(&self.filter)
    }

    /// Opens the join confirmation for `id`.
    ///
    /// Returns `false` for unknown, closed or already joined clubs.
    pub fn request_join(&mut self, id: RecordId) -> bool {
        let joinable = self.clubs.get(id).is_some_and(Club::can_join);
        if joinable {
            self.pending_join.stage(id);
        }
        debug!("event=club_join_request module=clubs id={id} staged={joinable}");
        joinable
    }

    /// Club awaiting join confirmation.
    pub fn pending_join(&self) -> Option<&Club> {
        self.pending_join.staged().and_then(|id| self.clubs.get(id))
    }

    /// Joins the staged club and closes the confirmation.
    pub fn confirm_join(&mut self) -> bool {
        let Some(id) = self.pending_join.commit() else {
            return false;
        };
        let joined = self.clubs.update(id, |club| {
            club.joined = true;
            club.members = club.members.saturating_add(1);
        });
        debug!("event=club_join module=clubs id={id} found={joined}");
        joined
    }

    pub fn cancel_join(&mut self) {
        self.pending_join.cancel();
    }

    pub fn stats(&self) -> ClubStats {
        ClubStats {
            total: self.clubs.len(),
            joined: self.clubs.count(&|club: &Club| club.joined),
            open: self.clubs.count(&|club: &Club| club.is_open),
        }
    }
}
