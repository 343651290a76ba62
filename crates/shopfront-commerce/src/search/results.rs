//! Search results and pagination summary.

use serde::{Deserialize, Serialize};

use crate::search::total_pages;

/// Pagination info for one rendered page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total_pages(total, per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Page numbers to draw a button for, one per page.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// Whether page controls should be drawn at all.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.page.saturating_sub(1) * self.per_page + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResults<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 8, 12);
        assert!(!p.has_prev);
        assert!(p.has_next);
        assert!(p.is_first());
        assert!(!p.is_last());
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(2, 8, 12);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert!(p.is_last());
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 8, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_pages());
        assert!(p.page_numbers().is_empty());
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(1, 8, 20);
        assert_eq!(p.page_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 8, 12);
        assert_eq!(p.start_item(), 9);
        assert_eq!(p.end_item(), 12);
    }

    #[test]
    fn test_search_results() {
        let results = SearchResults::new(vec![1, 2, 3], Pagination::new(1, 10, 3));
        assert_eq!(results.len(), 3);
        assert!(!results.is_empty());
    }
}
