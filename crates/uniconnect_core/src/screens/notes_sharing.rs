//! Notes-sharing screen: search, subject filter and sorting.
//!
//! # Invariants
//! - Sorting is stable; `Recent` keeps collection order.
//! - Sorting only reorders the derived view, never the collection.

use crate::model::note::SharedNote;
use crate::model::record::RecordId;
use crate::seed;
use crate::store::{ListStore, RecordFilter};
use crate::text::SearchQuery;
use log::debug;
use std::cmp::Ordering;

impl RecordFilter<SharedNote> for SearchQuery {
    fn matches(&self, record: &SharedNote) -> bool {
        self.matches_any(&[record.title.as_str(), record.subject.as_str()])
    }
}

/// Subject bar selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl RecordFilter<SharedNote> for SubjectFilter {
    fn matches(&self, record: &SharedNote) -> bool {
        match self {
            Self::All => true,
            Self::Subject(subject) => record.subject == *subject,
        }
    }
}

/// Sort order of the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteSort {
    /// Upload order as seeded.
    #[default]
    Recent,
    /// Most downloads first.
    Popular,
    /// Highest rating first.
    Rating,
}

impl NoteSort {
    pub const ALL: [NoteSort; 3] = [NoteSort::Recent, NoteSort::Popular, NoteSort::Rating];

    fn compare(self, left: &SharedNote, right: &SharedNote) -> Ordering {
        match self {
            Self::Recent => Ordering::Equal,
            Self::Popular => right.downloads.cmp(&left.downloads),
            Self::Rating => right.rating.total_cmp(&left.rating),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingStats {
    pub total: usize,
    pub total_downloads: u64,
    pub subjects: usize,
}

/// Mounted notes-sharing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesSharingScreen {
    notes: ListStore<SharedNote>,
    query: SearchQuery,
    subject: SubjectFilter,
    sort: NoteSort,
}

impl Default for NotesSharingScreen {
    fn default() -> Self {
        Self::mount()
    }
}

impl NotesSharingScreen {
    pub fn mount() -> Self {
        Self {
            notes: ListStore::from_seed(seed::shared_notes()),
            query: SearchQuery::default(),
            subject: SubjectFilter::All,
            sort: NoteSort::Recent,
        }
    }

    pub fn notes(&self) -> &ListStore<SharedNote> {
        &self.notes
    }

    /// Distinct subjects in first-seen order, without the `all` entry.
    pub fn subjects(&self) -> Vec<&str> {
        let mut subjects: Vec<&str> = Vec::new();
        for note in self.notes.items() {
            if !subjects.contains(&note.subject.as_str()) {
                subjects.push(note.subject.as_str());
            }
        }
        subjects
    }

    pub fn set_search(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
    }

    pub fn set_subject(&mut self, subject: SubjectFilter) {
        self.subject = subject;
    }

    pub fn set_sort(&mut self, sort: NoteSort) {
        self.sort = sort;
    }

    pub fn sort(&self) -> NoteSort {
        self.sort
    }

    /// Notes matching both search and subject, in the selected order.
    pub fn visible(&self) -> Vec<&SharedNote> {
        let mut visible = self.notes.view(&|note: &SharedNote| {
            self.query.matches(note) && self.subject.matches(note)
        });
        visible.sort_by(|left, right| self.sort.compare(left, right));
        visible
    }

    pub fn download(&mut self, id: RecordId) -> bool {
        let found = self
            .notes
            .update(id, |note| note.downloads = note.downloads.saturating_add(1));
        debug!("event=shared_note_download module=notes_sharing id={id} found={found}");
        found
    }

    pub fn stats(&self) -> SharingStats {
        SharingStats {
            total: self.notes.len(),
            total_downloads: self.notes.sum_by(|note| u64::from(note.downloads)),
            subjects: self.subjects().len(),
        }
    }
}
