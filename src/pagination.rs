//! Pagination Utilities
//!
//! Fixed-size page math and the windowed set of page-number buttons.

use std::ops::Range;

/// Number of pages needed for `len` items (0 when there are none)
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Clamp `page` into `[1, total]`; always 1 when there are no pages
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

/// Index range of `page` (1-based) over `len` items
pub fn page_range(page: usize, per_page: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = page.saturating_mul(per_page).min(len);
    start..end
}

/// Page numbers to render as buttons, at most `max_buttons`, windowed
/// around `current`.
pub fn page_buttons(current: usize, total: usize, max_buttons: usize) -> Vec<usize> {
    if total <= max_buttons {
        return (1..=total).collect();
    }
    let half = max_buttons / 2;
    let first = if current <= half + 1 {
        1
    } else if current >= total - half {
        total + 1 - max_buttons
    } else {
        current - half
    };
    (first..first + max_buttons).collect()
}

/// `"Showing {first}-{last} of {n} posts"`
pub fn range_summary(page: usize, per_page: usize, len: usize) -> String {
    let range = page_range(page, per_page, len);
    if range.is_empty() {
        format!("Showing 0 of {} posts", len)
    } else {
        format!("Showing {}-{} of {} posts", range.start + 1, range.end, len)
    }
}
