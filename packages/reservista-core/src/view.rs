//! Derived, paginated view over a collection.

use serde::Serialize;

use crate::record::Record;
use crate::search::SearchTerm;

/// One page of a filtered, sorted collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<T> {
    /// Records on the current page, newest first
    pub items: Vec<Record<T>>,
    /// 1-based page number
    pub current_page: usize,
    /// Number of pages in the filtered result (0 when nothing matches)
    pub total_pages: usize,
    /// Records matching the search term
    pub total_filtered_count: usize,
    /// Records in the collection, ignoring the search term
    pub original_count: usize,
    /// Records per page
    pub page_size: usize,
    /// Active search term (empty = no filter)
    pub search_term: String,
    /// A mutation is in flight
    pub is_loading: bool,
}

/// Item range and navigation state for a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// 1-based position of the first visible item (0 when the page is empty)
    pub start_item: usize,
    /// 1-based position of the last visible item (0 when the page is empty)
    pub end_item: usize,
    /// A previous page exists
    pub can_previous: bool,
    /// A next page exists
    pub can_next: bool,
}

impl<T> View<T> {
    /// Returns the visible item range and navigation state.
    pub fn window(&self) -> PageWindow {
        let (start_item, end_item) = if self.items.is_empty() {
            (0, 0)
        } else {
            let start = page_start(self.current_page, self.page_size);
            (start + 1, start + self.items.len())
        };
        PageWindow {
            start_item,
            end_item,
            can_previous: self.current_page > 1,
            can_next: self.current_page < self.total_pages,
        }
    }

    /// Returns `true` if the collection holds no records at all.
    pub fn is_collection_empty(&self) -> bool {
        self.original_count == 0
    }

    /// Returns `true` if records exist but none match the search term.
    pub fn is_filtered_empty(&self) -> bool {
        self.original_count > 0 && self.total_filtered_count == 0
    }
}

/// Number of pages needed for `filtered` records, 0 when nothing matches.
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    filtered.div_ceil(page_size)
}

fn page_start(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Computes the page of `records` visible for the given search term and page.
///
/// Filters by `search`, sorts by `created_at` descending (stable, so records
/// with equal timestamps keep collection order), then slices out `page`.
/// Pages past the end yield an empty slice.
pub fn compute_view<T: Clone + Serialize>(
    records: &[Record<T>],
    search: &SearchTerm,
    page: usize,
    page_size: usize,
    is_loading: bool,
) -> View<T> {
    let mut filtered: Vec<&Record<T>> = records
        .iter()
        .filter(|record| search.matches(record))
        .collect();
    filtered.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    let total_filtered_count = filtered.len();
    let start = page_start(page, page_size).min(total_filtered_count);
    let end = start.saturating_add(page_size).min(total_filtered_count);

    View {
        items: filtered[start..end].iter().map(|r| (*r).clone()).collect(),
        current_page: page,
        total_pages: total_pages(total_filtered_count, page_size),
        total_filtered_count,
        original_count: records.len(),
        page_size,
        search_term: search.as_str().to_string(),
        is_loading,
    }
}
