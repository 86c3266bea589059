//! Window selection over an item list.
//!
//! Pages are contiguous, fixed-size windows. The last page may be short; an
//! absent or empty list is a single empty page.

use std::ops::Range;

/// Highest valid page index: `floor((len - 1) / page_size)`, or `0` for an
/// empty list.
///
/// A zero page size is treated like an empty list (one empty page).
pub fn max_page_index(len: usize, page_size: usize) -> usize {
    if len == 0 || page_size == 0 {
        return 0;
    }
    (len - 1) / page_size
}

/// Index range of page `page_index`, clamped to `len`.
///
/// Pages past the end yield an empty range at `len`.
pub fn page_range(
    len: usize,
    page_index: usize,
    page_size: usize,
) -> Range<usize> {
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Items visible on page `page_index`.
///
/// `None` (list not loaded yet) behaves like an empty list.
pub fn visible_slice<T>(
    items: Option<&[T]>,
    page_index: usize,
    page_size: usize,
) -> &[T] {
    match items {
        Some(items) => &items[page_range(items.len(), page_index, page_size)],
        None => &[],
    }
}

/// Current page and last page, for a pagination indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageIndicator {
    /// Page currently shown, always `<= max`.
    pub current: usize,
    /// Highest page index.
    pub max: usize,
}

impl PageIndicator {
    /// Indicator for a list of `len` items, clamping `page_index` into range.
    pub fn for_len(len: usize, page_index: usize, page_size: usize) -> Self {
        let max = max_page_index(len, page_size);
        Self {
            current: page_index.min(max),
            max,
        }
    }

    /// Number of pages, at least one.
    pub fn page_count(&self) -> usize {
        self.max + 1
    }

    /// `(page, is_current)` for every page, in order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..=self.max).map(|page| (page, page == self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_index_handles_degenerate_inputs() {
        assert_eq!(max_page_index(0, 5), 0);
        assert_eq!(max_page_index(1, 5), 0);
        assert_eq!(max_page_index(5, 5), 0);
        assert_eq!(max_page_index(6, 5), 1);
        assert_eq!(max_page_index(10, 0), 0);
    }

    #[test]
    fn page_range_clamps_past_the_end() {
        assert_eq!(page_range(12, 2, 5), 10..12);
        assert_eq!(page_range(12, 3, 5), 12..12);
        assert_eq!(page_range(12, usize::MAX, 5), 12..12);
    }

    #[test]
    fn indicator_lists_every_page() {
        let indicator = PageIndicator::for_len(12, 1, 5);
        let pages: Vec<_> = indicator.pages().collect();
        assert_eq!(pages, vec![(0, false), (1, true), (2, false)]);
        assert_eq!(indicator.page_count(), 3);
    }

    #[test]
    fn indicator_clamps_stale_page() {
        let indicator = PageIndicator::for_len(4, 3, 5);
        assert_eq!(indicator, PageIndicator { current: 0, max: 0 });
    }
}
