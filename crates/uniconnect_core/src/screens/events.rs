//! Events screen: category filter and registration toggle.

use crate::model::event::{CampusEvent, EventCategory};
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use log::debug;

/// Filter bar selection of the events screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Category(EventCategory),
}

impl EventFilter {
    /// Filter bar order: `all` followed by every category.
    pub fn options() -> Vec<EventFilter> {
        std::iter::once(EventFilter::All)
            .chain(EventCategory::ALL.into_iter().map(EventFilter::Category))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }
}

impl RecordFilter<CampusEvent> for EventFilter {
    fn matches(&self, record: &CampusEvent) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == *category,
        }
    }
}

/// Header counters of the events screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStats {
    pub total: usize,
    pub registered: usize,
    pub total_attendees: u64,
}

/// Mounted events screen.
#[derive(Debug, Clone, PartialEq)]
pub struct EventsScreen {
    events: ListStore<CampusEvent>,
    filter: EventFilter,
}

impl Default for EventsScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl EventsScreen {
    pub fn mount() -> Self {
        Self {
            events: ListStore::from_seed(seed::events()),
            filter: EventFilter::All,
        }
    }

    pub fn events(&self) -> &ListStore<CampusEvent> {
        &self.events
    }

    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&CampusEvent> {
        self.events.view(&self.filter)
    }

    /// Registers for, or withdraws from, event `id`.
    ///
    /// The attendee count is informational and left unchanged.
    pub fn toggle_registration(&mut self, id: RecordId) -> bool {
        let found = self
            .events
            .update(id, |event| event.registered = !event.registered);
        debug!("event=event_register_toggle module=events id={id} found={found}");
        found
    }

    pub fn stats(&self) -> EventStats {
        EventStats {
            total: self.events.len(),
            registered: self.events.count(&|event: &CampusEvent| event.registered),
            total_attendees: self.events.sum_by(|event| u64::from(event.attendees)),
        }
    }
}
