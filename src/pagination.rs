use std::ops::Range;

use crate::domain::types::{PageNumber, PageSize};

/// Validated page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: PageNumber,
    pub page_size: PageSize,
}

impl Pagination {
    pub fn new(page: PageNumber, page_size: PageSize) -> Self {
        Self { page, page_size }
    }

    /// Index range of the requested page within a collection of `len` items.
    ///
    /// A page starting past the end yields an empty range at `len`.
    pub fn bounds(&self, len: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.page.get() - 1).saturating_mul(size);
        if start >= len {
            return len..len;
        }
        let end = start.saturating_add(size).min(len);
        start..end
    }

    /// Keeps only the items of the requested page.
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let range = self.bounds(items.len());
        items.truncate(range.end);
        items.drain(..range.start);
        items
    }
}
