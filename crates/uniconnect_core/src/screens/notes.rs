//! Notes screen: searchable study material with download counters.

use crate::model::note::Note;
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use crate::text::SearchQuery;
use log::debug;

impl RecordFilter<Note> for SearchQuery {
    fn matches(&self, record: &Note) -> bool {
        self.matches_any(&[record.title.as_str(), record.subject.as_str()])
    }
}

/// Header counters of the notes screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesStats {
    pub note_count: usize,
    pub total_downloads: u64,
}

/// Mounted notes screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesScreen {
    notes: ListStore<Note>,
    query: SearchQuery,
}

impl Default for NotesScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl NotesScreen {
    pub fn mount() -> Self {
        Self {
            notes: ListStore::from_seed(seed::notes()),
            query: SearchQuery::default(),
        }
    }

    pub fn notes(&self) -> &ListStore<Note> {
        &self.notes
    }

    pub fn search(&self) -> &SearchQuery {
        &self.query
    }

    /// Replaces the search text; matching is on title or subject.
    pub fn set_search(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
    }

    pub fn visible(&self) -> Vec<&Note> {
        self.notes.view(&self.query)
    }

    /// Counts one download of note `id`.
    pub fn download(&mut self, id: RecordId) -> bool {
        let found = self
            .notes
            .update(id, |note| note.downloads = note.downloads.saturating_add(1));
        debug!("event=note_download module=notes id={id} found={found}");
        found
    }

    pub fn stats(&self) -> NotesStats {
        NotesStats {
            note_count: self.notes.len(),
            total_downloads: self.notes.sum_by(|note| u64::from(note.downloads)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotesScreen;

    #[test]
    fn search_matches_title_or_subject() {
        let mut screen = NotesScreen::mount();
        screen.set_search("physics");
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Physics Notes - Quantum Mechanics");

        screen.set_search("DESIGN");
        assert_eq!(screen.visible().len(), 1);

        screen.set_search("");
        assert_eq!(screen.visible().len(), 3);
    }

    #[test]
    fn download_increments_only_that_note_and_stats_follow() {
        let mut screen = NotesScreen::mount();
        assert_eq!(screen.stats().total_downloads, 234 + 156 + 189);

        assert!(screen.download(2));
        assert_eq!(screen.notes().get(2).unwrap().downloads, 157);
        assert_eq!(screen.notes().get(1).unwrap().downloads, 234);
        assert_eq!(screen.stats().total_downloads, 234 + 157 + 189);
        assert!(!screen.download(42));
    }
}
