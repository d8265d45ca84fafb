//! Placements screen: job filters and confirmation-gated applications.

use crate::model::placement::{Placement, PlacementKind};
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, PendingSelection, RecordFilter};
use log::debug;

/// Filter tab selection of the placements screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementFilter {
    #[default]
    All,
    Internship,
    FullTime,
    Applied,
}

impl PlacementFilter {
    pub const ALL: [PlacementFilter; 4] = [
        PlacementFilter::All,
        PlacementFilter::Internship,
        PlacementFilter::FullTime,
        PlacementFilter::Applied,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Internship => "internship",
            Self::FullTime => "fulltime",
            Self::Applied => "applied",
        }
    }
}

impl RecordFilter<Placement> for PlacementFilter {
    fn matches(&self, record: &Placement) -> bool {
        match self {
            Self::All => true,
            Self::Internship => record.kind == PlacementKind::Internship,
            Self::FullTime => record.kind == PlacementKind::FullTime,
            Self::Applied => record.applied,
        }
    }
}

/// Header counters of the placements screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementStats {
    pub total: usize,
    pub applied: usize,
    pub internships: usize,
    pub full_time: usize,
}

/// Mounted placements screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementsScreen {
    placements: ListStore<Placement>,
    filter: PlacementFilter,
    pending_application: PendingSelection,
}

impl Default for PlacementsScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl PlacementsScreen {
    pub fn mount() -> Self {
        Self {
            placements: ListStore::from_seed(seed::placements()),
            filter: PlacementFilter::All,
            pending_application: PendingSelection::new(),
        }
    }

    pub fn placements(&self) -> &ListStore<Placement> {
        &self.placements
    }

    pub fn filter(&self) -> PlacementFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: PlacementFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Placement> {
        self.placements.view(&self.filter)
    }

    /// Opens the application confirmation for `id`.
    ///
    /// Returns `false` for unknown or already applied placements.
    pub fn request_application(&mut self, id: RecordId) -> bool {
        let open = self
            .placements
            .get(id)
            .is_some_and(|placement| !placement.applied);
        if open {
            self.pending_application.stage(id);
        }
        debug!("event=placement_apply_request module=placements id={id} staged={open}");
        open
    }

    pub fn pending_application(&self) -> Option<&Placement> {
        self.pending_application
            .staged()
            .and_then(|id| self.placements.get(id))
    }

    /// Submits the staged application and closes the confirmation.
    pub fn confirm_application(&mut self) -> bool {
        let Some(id) = self.pending_application.commit() else {
            return false;
        };
        let applied = self
            .placements
            .update(id, |placement| placement.applied = true);
        debug!("event=placement_apply module=placements id={id} found={applied}");
        applied
    }

    pub fn cancel_application(&mut self) {
        self.pending_application.cancel();
    }

    pub fn stats(&self) -> PlacementStats {
        PlacementStats {
            total: self.placements.len(),
            applied: self.placements.count(&PlacementFilter::Applied),
            internships: self.placements.count(&PlacementFilter::Internship),
            full_time: self.placements.count(&PlacementFilter::FullTime),
        }
    }
}
