//! Backing records for the in-memory store.
//!
//! Records carry numeric identities; wire subjects are their decimal
//! renderings. Ids come from monotonic sequences seeded past the highest
//! id ever observed, so a deleted id is never handed out again and a stale
//! handle can never resolve to a different row.

pub mod api_resource;
pub mod client;
pub mod identity_resource;

use derive_more::Deref;

///
/// IdSequence
///
/// Monotonic id source for one collection.
///

#[derive(Clone, Copy, Debug)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// A sequence positioned past every id already in `items`.
    #[must_use]
    pub fn after<T>(items: &[T], id_of: impl Fn(&T) -> u32) -> Self {
        Self {
            next: items.iter().map(id_of).max().map_or(1, |id| id + 1),
        }
    }

    pub fn take(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

///
/// Rows
///
/// One child collection plus the sequence its row ids are drawn from.
/// Reads go through `Deref` to the underlying slice; mutation is limited
/// to `add`, `retain`, and `iter_mut` so the sequence cannot drift.
///

#[derive(Clone, Debug, Deref)]
pub struct Rows<T> {
    #[deref]
    items: Vec<T>,
    ids: IdSequence,
}

impl<T> Rows<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: IdSequence::new(),
        }
    }

    /// Adopt pre-built rows, positioning the sequence past their ids.
    #[must_use]
    pub fn seeded(items: Vec<T>, id_of: impl Fn(&T) -> u32) -> Self {
        let ids = IdSequence::after(&items, id_of);

        Self { items, ids }
    }

    /// Append a row built around the next id; returns that id.
    pub fn add(&mut self, build: impl FnOnce(u32) -> T) -> u32 {
        let id = self.ids.take();
        self.items.push(build(id));

        id
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for Rows<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSequence, Rows};

    #[test]
    fn sequence_starts_at_one_and_never_goes_back() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.take(), 1);
        assert_eq!(seq.take(), 2);

        let mut seq = IdSequence::after(&[1u32, 3], |id| *id);
        assert_eq!(seq.take(), 4);
    }

    #[test]
    fn rows_do_not_reuse_a_removed_id() {
        let mut rows: Rows<u32> = Rows::new();
        rows.add(|id| id);
        rows.add(|id| id);

        // removing the highest row must not recycle its id
        rows.retain(|row| *row != 2);
        assert_eq!(rows.add(|id| id), 3);
    }

    #[test]
    fn seeded_rows_continue_past_the_existing_ids() {
        let mut rows = Rows::seeded(vec![1u32, 2], |id| *id);
        assert_eq!(rows.add(|id| id), 3);
    }
}
