//! Page-at-a-time iteration over a frozen copy of the address book.
//!
//! [`Paginator`] owns a snapshot of the records taken when it was created,
//! so edits made to the book afterwards never show up in pages already being
//! walked. Each call to `next` hands out the window
//! `[position * n, min((position + 1) * n, total))` and advances; once the
//! window starts past the end the paginator is finished for good. Start over
//! by asking the book for a fresh paginator.

use crate::model::Record;
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
pub struct Paginator {
    snapshot: Vec<Record>,
    page_size: usize,
    position: usize,
}

impl Paginator {
    /// A `page_size` of zero is treated as one.
    pub fn new(snapshot: Vec<Record>, page_size: usize) -> Self {
        Self {
            snapshot,
            page_size: page_size.max(1),
            position: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of pages in the snapshot, consumed or not.
    pub fn page_count(&self) -> usize {
        self.snapshot.len().div_ceil(self.page_size)
    }

    /// Number of records in the snapshot.
    pub fn total(&self) -> usize {
        self.snapshot.len()
    }

    fn remaining_pages(&self) -> usize {
        self.page_count().saturating_sub(self.position)
    }
}

impl Iterator for Paginator {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.snapshot.len();
        let start = self.position * self.page_size;
        if start >= total {
            return None;
        }
        let end = (start + self.page_size).min(total);
        let page = self.snapshot.get(start..end)?.to_vec();
        self.position += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_pages();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Paginator {}

impl FusedIterator for Paginator {}
