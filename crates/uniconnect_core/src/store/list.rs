//! Generic in-memory record list.
//!
//! # Responsibility
//! - Own one screen's ordered collection, seeded at mount.
//! - Provide by-id update/remove and non-destructive filtered views.
//!
//! # Invariants
//! - `update` touches at most one record and never reorders the list.
//! - `view`/`count` never mutate the collection.
//! - Unknown ids are a no-op, never an error.

use crate::model::record::{Record, RecordId};

/// Selection predicate over one record type.
///
/// Implemented by each screen's filter enum and by plain closures.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

impl<T, F> RecordFilter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, record: &T) -> bool {
        self(record)
    }
}

/// Ordered, id-addressed record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T> {
    items: Vec<T>,
}

impl<T: Record> ListStore<T> {
    /// Creates a store from seed records in display order.
    ///
    /// Seed ids must be unique.
    pub fn from_seed(items: Vec<T>) -> Self {
        debug_assert!(
            items
                .iter()
                .enumerate()
                .all(|(idx, item)| items[..idx].iter().all(|prev| prev.id() != item.id())),
            "seed record ids must be unique"
        );
        Self { items }
    }

    /// Full collection in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Derived view of records accepted by `filter`, in collection order.
    pub fn view<F: RecordFilter<T> + ?Sized>(&self, filter: &F) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Number of records accepted by `filter`.
    pub fn count<F: RecordFilter<T> + ?Sized>(&self, filter: &F) -> usize {
        self.items.iter().filter(|item| filter.matches(item)).count()
    }

    /// Sum of a per-record metric across the whole collection.
    pub fn sum_by(&self, metric: impl Fn(&T) -> u64) -> u64 {
        self.items.iter().map(metric).sum()
    }

    /// Applies `change` to the record with `id`.
    ///
    /// Returns `false` and leaves the collection untouched on unknown ids.
    pub fn update(&mut self, id: RecordId, change: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                change(item);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id` permanently.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
