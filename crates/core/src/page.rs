//! Pagination primitives shared by all list queries.

use serde::{Deserialize, Serialize};

/// Page metadata that helps navigation through a listing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Total number of entities matching the query (not just this page).
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

/// A page of entities plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub metadata: PageMetadata,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, metadata: PageMetadata) -> Self {
        Self { metadata, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice a full result set into a page. Used by in-memory repositories.
pub fn paginate<T: Clone>(items: &[T], offset: u64, limit: u64) -> Page<T> {
    let total = items.len() as u64;
    let start = offset.min(total) as usize;
    let end = offset.saturating_add(limit).min(total) as usize;

    Page {
        metadata: PageMetadata {
            total,
            offset,
            limit,
        },
        items: items[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_within_bounds() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginate(&items, 4, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.metadata.total, 10);
        assert_eq!(page.metadata.offset, 4);
        assert_eq!(page.metadata.limit, 3);
    }

    #[test]
    fn paginate_past_the_end_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        let page = paginate(&items, 10, 5);
        assert!(page.is_empty());
        assert_eq!(page.metadata.total, 3);
    }

    #[test]
    fn paginate_clamps_limit_to_remaining() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, 3, 100);
        assert_eq!(page.items, vec![3, 4]);
    }
}
