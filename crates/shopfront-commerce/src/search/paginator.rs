//! Page slicing and current-page tracking.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Number of pages needed for `count` items.
///
/// Zero items means zero pages, so no page controls are drawn. A zero
/// page size also yields zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The items on a 1-indexed page.
///
/// Returns the slice `[(page - 1) * page_size, page * page_size)` clamped
/// to the input, or an empty slice when the page lies past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page and page size.
///
/// `current_page` is 1-indexed and kept within `1..=max(total_pages, 1)`
/// by every method that takes the page count. Only [`PageState::new`]
/// builds one, so there is no `Deserialize`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl PageState {
    /// Start on page 1.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    /// Current 1-indexed page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Jump to a page, clamped to the valid range. Returns the page landed on.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> usize {
        self.current_page = page.clamp(1, total_pages.max(1));
        self.current_page
    }

    /// Advance one page, stopping at the last.
    pub fn next(&mut self, total_pages: usize) -> usize {
        self.go_to(self.current_page.saturating_add(1), total_pages)
    }

    /// Go back one page, stopping at the first.
    pub fn prev(&mut self) -> usize {
        self.current_page = self.current_page.saturating_sub(1).max(1);
        self.current_page
    }

    /// Return to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
