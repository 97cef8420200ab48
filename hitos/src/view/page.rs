/// Rows per page in the milestone editor.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of an already filtered and sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Zero-based.
    pub page_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn is_last(&self) -> bool {
        self.page_index + 1 >= self.total_pages
    }
}

/// `ceil(count / page_size)`, but never less than one page. A zero page size
/// is treated as one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slices page `page_index` out of `items`. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: &items[start..end],
        page_index,
        total_pages: total_pages(items.len(), page_size),
        total_items: items.len(),
    }
}
