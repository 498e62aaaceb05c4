//! Fixed-size pagination over a fetched launch list.
//!
//! The client returns one bounded list; the page view slices it locally.
//! Pure slicing only - rendering belongs to the caller.

use crate::models::Launch;

/// Launches shown per page
pub const ITEMS_PER_PAGE: usize = 5;

/// One page of an already-fetched list.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: &'a [Launch],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice out page `page` (zero-based, clamped to the last page).
///
/// An empty list yields a single empty page rather than an error.
pub fn paginate(items: &[Launch], page: usize) -> PageView<'_> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(ITEMS_PER_PAGE).max(1);
    let current_page = page.min(total_pages - 1);

    let offset = current_page * ITEMS_PER_PAGE;
    let end = (offset + ITEMS_PER_PAGE).min(total_items);

    PageView {
        items: &items[offset..end],
        current_page,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn launches(n: usize) -> Vec<Launch> {
        (1..=n)
            .map(|i| Launch::new(json!({"id": i.to_string()})))
            .collect()
    }

    #[test]
    fn test_first_page() {
        let data = launches(12);
        let view = paginate(&data, 0);

        assert_eq!(view.items.len(), 5);
        assert_eq!(view.items[0].id(), Some("1"));
        assert_eq!(view.current_page, 0);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.total_items, 12);
    }

    #[test]
    fn test_last_page_is_partial() {
        let data = launches(12);
        let view = paginate(&data, 2);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].id(), Some("11"));
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let data = launches(12);
        let view = paginate(&data, 99);

        assert_eq!(view.current_page, 2);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail_page() {
        let data = launches(10);
        assert_eq!(paginate(&data, 0).total_pages, 2);
        assert_eq!(paginate(&data, 1).items.len(), 5);
    }

    #[test]
    fn test_empty_list_yields_one_empty_page() {
        let view = paginate(&[], 0);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 0);
        assert!(view.items.is_empty());
    }
}
