//! Page arithmetic for paginated tables.
//!
//! Everything here is a pure function of its inputs. Navigation never fails:
//! out-of-range pages are clamped and a zero page size falls back to
//! [`DEFAULT_PAGE_SIZE`], so a transient bad prop can never break a render.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Page size used when the caller supplies zero or a negative size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// =============================================================================
// PageState
// =============================================================================

/// Position within a paginated collection.
///
/// Pages are 1-based. A state built through [`PageState::new`] always has a
/// non-zero page size and a current page inside `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    /// The page being shown (1-based).
    pub current_page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl PageState {
    /// Create a state, clamping the page and defaulting a zero page size.
    pub fn new(total_items: usize, current_page: usize, page_size: usize) -> Self {
        let page_size = normalize_page_size(page_size);
        let current_page = clamp_page(current_page, total_pages(total_items, page_size));
        Self {
            current_page,
            page_size,
            total_items,
        }
    }

    /// Create a state from untrusted signed inputs.
    ///
    /// Negative totals become zero, pages below one become one and a
    /// non-positive page size falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn from_raw(total_items: i64, current_page: i64, page_size: i64) -> Self {
        if total_items < 0 {
            log::debug!("[pagination] negative total {} treated as 0", total_items);
        }
        if page_size <= 0 {
            log::debug!(
                "[pagination] page size {} replaced by default {}",
                page_size,
                DEFAULT_PAGE_SIZE
            );
        }
        let total_items = usize::try_from(total_items).unwrap_or(0);
        let current_page = usize::try_from(current_page).unwrap_or(1);
        let page_size = usize::try_from(page_size).unwrap_or(0);
        Self::new(total_items, current_page, page_size)
    }

    /// Re-apply the invariants to a state that may have been built by hand.
    pub fn normalized(self) -> Self {
        Self::new(self.total_items, self.current_page, self.page_size)
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Derived metadata for this state.
    pub fn info(&self) -> PageInfo {
        compute(self.total_items, self.current_page, self.page_size)
    }

    /// Replace the item count, re-clamping the current page.
    pub fn with_total_items(self, total_items: usize) -> Self {
        Self::new(total_items, self.current_page, self.page_size)
    }
}

// =============================================================================
// PageInfo
// =============================================================================

/// Metadata derived from a [`PageState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_items: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// The clamped current page.
    pub current_page: usize,
    /// Index of the first item on the page.
    pub start_index: usize,
    /// Index of the last item on the page, `None` when there are no items.
    pub end_index: Option<usize>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PageInfo {
    /// Half-open index range of the items on this page.
    pub fn range(&self) -> Range<usize> {
        match self.end_index {
            Some(end) => self.start_index..end + 1,
            None => self.start_index..self.start_index,
        }
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.range().len()
    }

    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.end_index.is_none()
    }

    /// Human readable range, e.g. `21–25 of 25`.
    pub fn summary(&self) -> String {
        match self.end_index {
            Some(end) => format!(
                "{}–{} of {}",
                self.start_index + 1,
                end + 1,
                self.total_items
            ),
            None => "0 of 0".to_string(),
        }
    }
}

/// Derive pagination metadata.
///
/// `current_page` is clamped into `[1, total_pages]` before use.
pub fn compute(total_items: usize, current_page: usize, page_size: usize) -> PageInfo {
    let page_size = normalize_page_size(page_size);
    let total_pages = total_pages(total_items, page_size);
    let current_page = clamp_page(current_page, total_pages);

    let start_index = (current_page - 1) * page_size;
    let end_index = (total_items > 0).then(|| {
        start_index
            .saturating_add(page_size - 1)
            .min(total_items - 1)
    });

    PageInfo {
        total_items,
        page_size,
        total_pages,
        current_page,
        start_index,
        end_index,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
        is_first_page: current_page == 1,
        is_last_page: current_page == total_pages,
    }
}

/// `max(1, ceil(total_items / page_size))`.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(normalize_page_size(page_size)).max(1)
}

fn normalize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

// =============================================================================
// Navigation
// =============================================================================

/// A navigation request against a [`PageState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageIntent {
    GoTo(usize),
    Next,
    Previous,
    First,
    Last,
    SetPageSize(usize),
}

/// Apply an intent, producing the next state.
pub fn apply(state: PageState, intent: PageIntent) -> PageState {
    match intent {
        PageIntent::GoTo(page) => go_to_page(state, page),
        PageIntent::Next => next_page(state),
        PageIntent::Previous => previous_page(state),
        PageIntent::First => first_page(state),
        PageIntent::Last => last_page(state),
        PageIntent::SetPageSize(size) => set_page_size(state, size),
    }
}

/// Jump to `target`, clamped into the valid page range.
pub fn go_to_page(state: PageState, target: usize) -> PageState {
    PageState::new(state.total_items, target, state.page_size)
}

/// Advance one page. Returns `state` unchanged on the last page.
pub fn next_page(state: PageState) -> PageState {
    let info = state.info();
    if info.is_last_page {
        return state;
    }
    go_to_page(state, info.current_page + 1)
}

/// Go back one page. Returns `state` unchanged on the first page.
pub fn previous_page(state: PageState) -> PageState {
    let info = state.info();
    if info.is_first_page {
        return state;
    }
    go_to_page(state, info.current_page - 1)
}

pub fn first_page(state: PageState) -> PageState {
    go_to_page(state, 1)
}

pub fn last_page(state: PageState) -> PageState {
    go_to_page(state, state.total_pages())
}

/// Change the page size.
///
/// The current page number is kept only if the first item being viewed still
/// lands on that page under the new size. Otherwise the state returns to
/// page 1.
pub fn set_page_size(state: PageState, page_size: usize) -> PageState {
    let state = state.normalized();
    let page_size = normalize_page_size(page_size);
    if page_size == state.page_size {
        return state;
    }

    let first_visible = (state.current_page - 1) * state.page_size;
    let page_of_first = first_visible / page_size + 1;
    let current_page = if page_of_first == state.current_page {
        state.current_page
    } else {
        1
    };

    PageState::new(state.total_items, current_page, page_size)
}

// =============================================================================
// Page window
// =============================================================================

/// One entry of a numbered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, current: bool },
    /// A run of two or more hidden pages.
    Ellipsis,
}

/// Numbered page links around the current page.
///
/// The first and last pages are always present, along with `siblings` pages
/// on each side of the current one. A gap of a single page shows that page
/// rather than an ellipsis.
pub fn page_window(info: &PageInfo, siblings: usize) -> Vec<PageItem> {
    let total = info.total_pages.max(1);
    let current = info.current_page;
    let page = |number: usize| PageItem::Page {
        number,
        current: number == current,
    };

    let mut items = vec![page(1)];
    if total == 1 {
        return items;
    }

    let lo = current.saturating_sub(siblings).max(2);
    let hi = current.saturating_add(siblings).min(total - 1);

    if lo > 2 {
        items.push(if lo == 3 { page(2) } else { PageItem::Ellipsis });
    }
    items.extend((lo..=hi).map(page));
    if hi < total - 1 {
        items.push(if hi == total - 2 {
            page(total - 1)
        } else {
            PageItem::Ellipsis
        });
    }
    items.push(page(total));

    items
}
