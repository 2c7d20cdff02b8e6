//! Pure pagination arithmetic over an externally supplied item count.
//!
//! Zero-item convention: `total_pages()` is 0 and every navigation call is a
//! no-op; display code that wants "page 1 of 1" over an empty list should
//! clamp on its side. This matches `ceil(0 / n) == 0`.

/// Pagination state: current page, page size, total item count.
///
/// Pages are 1-based. All operations are total; the only mutation is the
/// current page (and the total count via [`PageWindow::set_total_items`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl PageWindow {
    /// Creates a window on page 1.
    ///
    /// # Panics
    ///
    /// Panics if `items_per_page` is 0.
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        assert!(items_per_page > 0, "items_per_page must be > 0");
        Self {
            current_page: 1,
            items_per_page,
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / items_per_page)`; 0 when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// One past the index of the last item on the current page, clamped to
    /// the item count.
    pub fn end_index(&self) -> usize {
        usize::min(self.start_index() + self.items_per_page, self.total_items)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Moves to `page`; a no-op when `page` is outside `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn go_to_previous(&mut self) {
        if self.can_go_previous() {
            self.current_page -= 1;
        }
    }

    pub fn go_to_next(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn go_to_first(&mut self) {
        self.current_page = 1;
    }

    /// Returns to page 1, for when the underlying list changes wholesale
    /// (a filter or category switch).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn go_to_last(&mut self) {
        self.current_page = usize::max(self.total_pages(), 1);
    }

    /// Updates the item count, clamping the current page back into range
    /// when the list shrank underneath it.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last = usize::max(self.total_pages(), 1);
        if self.current_page > last {
            self.current_page = last;
        }
    }

    /// The slice of `items` on the current page.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::min(self.start_index(), items.len());
        let end = usize::min(self.end_index(), items.len());
        &items[start..end]
    }

    /// A centered, clamped window of page numbers for UI pagers.
    ///
    /// Exactly `max_visible` numbers once there are that many pages, never
    /// outside `[1, total_pages]`; near an edge the window shifts toward the
    /// side that has room instead of shrinking.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        let total = self.total_pages();
        if max_visible == 0 || total == 0 {
            return Vec::new();
        }
        if total <= max_visible {
            return (1..=total).collect();
        }

        let half = max_visible / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        if start + max_visible - 1 > total {
            start = total - max_visible + 1;
        }
        let end = start + max_visible - 1;

        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PageWindow::new(95, 20).total_pages(), 5);
        assert_eq!(PageWindow::new(100, 20).total_pages(), 5);
        assert_eq!(PageWindow::new(101, 20).total_pages(), 6);
        assert_eq!(PageWindow::new(1, 20).total_pages(), 1);
    }

    #[test]
    fn test_zero_items_zero_pages() {
        let window = PageWindow::new(0, 20);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.start_index(), 0);
        assert_eq!(window.end_index(), 0);
        assert!(!window.can_go_previous());
        assert!(!window.can_go_next());
    }

    #[test]
    fn test_last_partial_page_bounds() {
        let mut window = PageWindow::new(95, 20);
        window.go_to_page(5);
        assert_eq!(window.start_index(), 80);
        assert_eq!(window.end_index(), 95);
        assert!(window.can_go_previous());
        assert!(!window.can_go_next());
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let mut window = PageWindow::new(95, 20);
        window.go_to_page(3);
        assert_eq!(window.current_page(), 3);

        window.go_to_page(6);
        assert_eq!(window.current_page(), 3);

        window.go_to_page(0);
        assert_eq!(window.current_page(), 3);
    }

    #[test]
    fn test_previous_next_navigation() {
        let mut window = PageWindow::new(50, 20);
        assert!(!window.can_go_previous());
        window.go_to_previous();
        assert_eq!(window.current_page(), 1);

        window.go_to_next();
        assert_eq!(window.current_page(), 2);
        window.go_to_next();
        assert_eq!(window.current_page(), 3);
        // Past the end
        window.go_to_next();
        assert_eq!(window.current_page(), 3);

        window.go_to_first();
        assert_eq!(window.current_page(), 1);
        window.go_to_last();
        assert_eq!(window.current_page(), 3);
    }

    #[test]
    fn test_go_to_last_on_empty_stays_on_page_one() {
        let mut window = PageWindow::new(0, 20);
        window.go_to_last();
        assert_eq!(window.current_page(), 1);
    }

    #[test]
    fn test_set_total_items_clamps_current_page() {
        let mut window = PageWindow::new(100, 20);
        window.go_to_page(5);
        window.set_total_items(45);
        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.current_page(), 3);

        window.set_total_items(0);
        assert_eq!(window.current_page(), 1);
    }

    #[test]
    fn test_page_items_slices_current_page() {
        let items: Vec<usize> = (0..95).collect();
        let mut window = PageWindow::new(items.len(), 20);
        assert_eq!(window.page_items(&items), &items[0..20]);

        window.go_to_page(5);
        assert_eq!(window.page_items(&items), &items[80..95]);

        let empty: Vec<usize> = Vec::new();
        let window = PageWindow::new(0, 20);
        assert!(window.page_items(&empty).is_empty());
    }

    #[test]
    fn test_page_numbers_all_when_few_pages() {
        let window = PageWindow::new(60, 20);
        assert_eq!(window.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_numbers_centered_window() {
        let mut window = PageWindow::new(200, 20); // 10 pages
        window.go_to_page(5);
        assert_eq!(window.page_numbers(5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_numbers_grows_right_at_left_edge() {
        let mut window = PageWindow::new(200, 20);
        window.go_to_page(1);
        assert_eq!(window.page_numbers(5), vec![1, 2, 3, 4, 5]);
        window.go_to_page(2);
        assert_eq!(window.page_numbers(5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_page_numbers_grows_left_at_right_edge() {
        let mut window = PageWindow::new(200, 20);
        window.go_to_page(10);
        assert_eq!(window.page_numbers(5), vec![6, 7, 8, 9, 10]);
        window.go_to_page(9);
        assert_eq!(window.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_page_numbers_even_max_visible_stays_within_bound() {
        let mut window = PageWindow::new(200, 20); // 10 pages
        window.go_to_page(5);
        assert_eq!(window.page_numbers(4), vec![3, 4, 5, 6]);

        // The bound holds on every page, edges included.
        for page in 1..=10 {
            window.go_to_page(page);
            let pages = window.page_numbers(4);
            assert_eq!(pages.len(), 4);
            assert!(pages.iter().all(|&p| (1..=10).contains(&p)));
        }
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut window = PageWindow::new(95, 20);
        window.go_to_page(4);
        assert_eq!(window.current_page(), 4);

        window.reset();
        assert_eq!(window.current_page(), 1);

        // Resetting an empty window is harmless.
        let mut empty = PageWindow::new(0, 20);
        empty.reset();
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_page_numbers_empty_cases() {
        assert!(PageWindow::new(0, 20).page_numbers(5).is_empty());
        assert!(PageWindow::new(100, 20).page_numbers(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "items_per_page must be > 0")]
    fn test_zero_items_per_page_panics() {
        let _ = PageWindow::new(10, 0);
    }
}
