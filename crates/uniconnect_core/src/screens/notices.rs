//! Notice board: severity filter, bookmarks and dismissal.

use crate::model::notice::{Notice, NoticeKind};
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use log::debug;

/// Filter tab selection of the notice board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeFilter {
    #[default]
    All,
    Kind(NoticeKind),
    Bookmarked,
}

impl NoticeFilter {
    pub const ALL: [NoticeFilter; 5] = [
        NoticeFilter::All,
        NoticeFilter::Kind(NoticeKind::Urgent),
        NoticeFilter::Kind(NoticeKind::Info),
        NoticeFilter::Kind(NoticeKind::Success),
        NoticeFilter::Bookmarked,
    ];
}

impl RecordFilter<Notice> for NoticeFilter {
    fn matches(&self, record: &Notice) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => record.kind == *kind,
            Self::Bookmarked => record.bookmarked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStats {
    pub total: usize,
    pub urgent: usize,
    pub bookmarked: usize,
}

/// Mounted notice board.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeBoardScreen {
    notices: ListStore<Notice>,
    filter: NoticeFilter,
}

impl Default for NoticeBoardScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl NoticeBoardScreen {
    pub fn mount() -> Self {
        Self {
            notices: ListStore::from_seed(seed::notices()),
            filter: NoticeFilter::All,
        }
    }

    pub fn notices(&self) -> &ListStore<Notice> {
        &self.notices
    }

    pub fn filter(&self) -> NoticeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: NoticeFilter) {
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&Notice> {
        self.notices.view(&self.filter)
    }

    pub fn toggle_bookmark(&mut self, id: RecordId) -> bool {
        let found = self
            .notices
            .update(id, |notice| notice.bookmarked = !notice.bookmarked);
        debug!("event=notice_bookmark module=notices id={id} found={found}");
        found
    }

    /// Removes notice `id` for the rest of this mount.
    pub fn dismiss(&mut self, id: RecordId) -> Option<Notice> {
        let removed = self.notices.remove(id);
        debug!(
            "event=notice_dismiss module=notices id={id} found={}",
            removed.is_some()
        );
        removed
    }

    pub fn stats(&self) -> NoticeStats {
        NoticeStats {
            total: self.notices.len(),
            urgent: self.notices.count(&NoticeFilter::Kind(NoticeKind::Urgent)),
            bookmarked: self.notices.count(&NoticeFilter::Bookmarked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeBoardScreen, NoticeFilter};
    use crate::model::notice::NoticeKind;

    #[test]
    fn kind_filter_selects_matching_notices() {
        let mut screen = NoticeBoardScreen::mount();
        screen.set_filter(NoticeFilter::Kind(NoticeKind::Urgent));
        let ids: Vec<u32> = screen.visible().iter().map(|notice| notice.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn bookmarks_drive_bookmarked_filter() {
        let mut screen = NoticeBoardScreen::mount();
        screen.set_filter(NoticeFilter::Bookmarked);
        assert!(screen.visible().is_empty());

        assert!(screen.toggle_bookmark(4));
        assert_eq!(screen.visible().len(), 1);
        assert_eq!(screen.stats().bookmarked, 1);

        assert!(screen.toggle_bookmark(4));
        assert!(screen.visible().is_empty());
    }

    #[test]
    fn dismiss_removes_exactly_one_notice() {
        let mut screen = NoticeBoardScreen::mount();
        let removed = screen.dismiss(1).unwrap();
        assert_eq!(removed.title, "Campus Closed Tomorrow");
        assert_eq!(screen.stats().total, 5);
        assert_eq!(screen.stats().urgent, 1);
        assert!(screen.visible().iter().all(|notice| notice.id != 1));
        assert!(screen.dismiss(1).is_none());
        assert_eq!(screen.notices().len(), 5);
    }
}
