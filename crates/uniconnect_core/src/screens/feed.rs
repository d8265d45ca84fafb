//! Activity feed: type filter, completion toggle and deletion.

use crate::model::feed::{FeedItem, FeedKind};
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Kind(FeedKind),
}

impl RecordFilter<FeedItem> for FeedFilter {
    fn matches(&self, record: &FeedItem) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => record.kind == *kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub active: usize,
    pub completed: usize,
}

/// Mounted events feed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventsFeedScreen {
    items: ListStore<FeedItem>,
    filter: FeedFilter,
}

impl Default for EventsFeedScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl EventsFeedScreen {
    pub fn mount() -> Self {
        Self {
            items: ListStore::from_seed(seed::feed_items()),
            filter: FeedFilter::All,
        }
    }

    pub fn items(&self) -> &ListStore<FeedItem> {
        &self.items
    }

    pub fn filter(&self) -> FeedFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FeedFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&FeedItem> {
        self.items.view(&self.filter)
    }

    pub fn toggle_complete(&mut self, id: RecordId) -> bool {
        let found = self
            .items
            .update(id, |item| item.completed = !item.completed);
        debug!("event=feed_toggle module=feed id={id} found={found}");
        found
    }

    pub fn delete(&mut self, id: RecordId) -> Option<FeedItem> {
        let removed = self.items.remove(id);
        debug!(
            "event=feed_delete module=feed id={id} found={}",
            removed.is_some()
        );
        removed
    }

    pub fn stats(&self) -> FeedStats {
        FeedStats {
            active: self.items.count(&|item: &FeedItem| !item.completed),
            completed: self.items.count(&|item: &FeedItem| item.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EventsFeedScreen, FeedFilter, FeedStats};
    use crate::model::feed::FeedKind;

    #[test]
    fn assignment_filter_keeps_both_deadlines() {
        let mut screen = EventsFeedScreen::mount();
        screen.set_filter(FeedFilter::Kind(FeedKind::Assignment));
        let ids: Vec<u32> = screen.visible().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn toggle_and_delete_update_counters() {
        let mut screen = EventsFeedScreen::mount();
        assert!(screen.toggle_complete(2));
        assert_eq!(
            screen.stats(),
            FeedStats {
                active: 4,
                completed: 1,
            }
        );

        assert!(screen.delete(2).is_some());
        assert_eq!(
            screen.stats(),
            FeedStats {
                active: 4,
                completed: 0,
            }
        );
        assert!(screen.delete(2).is_none());
    }
}
