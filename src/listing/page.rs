use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// ceil(count / page_size); zero when there is nothing to show
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// A 1-based, fixed-size window onto a filtered list
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    /// 1-based positions of the first and last item on this page, in the
    /// "Showing X to Y of N" sense. Both are 0 for an empty list.
    pub fn showing(&self) -> (usize, usize) {
        let start = (self.page_index - 1) * self.page_size + 1;
        let end = self.page_index * self.page_size;
        (start.min(self.total_items), end.min(self.total_items))
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Slice `[(page-1)*size, page*size)` out of `items`.
///
/// `page_index` is clamped to `[1, total_pages]`; with no pages at all it
/// stays at 1 and the page is empty.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let pages = total_pages(items.len(), page_size);
    let page_index = page_index.clamp(1, pages.max(1));

    let start = ((page_index - 1) * page_size).min(items.len());
    let end = (page_index * page_size).min(items.len());

    Page {
        page_index,
        page_size,
        total_pages: pages,
        total_items: items.len(),
        items: &items[start..end],
    }
}
