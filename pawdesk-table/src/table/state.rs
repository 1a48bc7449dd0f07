//! Data table state.

use std::collections::HashSet;

use crate::column::{Column, TableRow};
use crate::config::TableConfig;
use crate::control::{Control, ControlMode, Managed};
use crate::pagination::{self, PageInfo, PageIntent, PageState};
use crate::sort::{SortEvent, SortState};
use crate::visibility::ColumnVisibility;

use super::events::EventResult;
use super::{PaginationProps, RowSource, TableCallbacks, TableProps};

/// A paginated, sortable table over rows of type `T`.
///
/// `DataTable` owns its page and sort state (unless the parent controls
/// them) and reads everything else from its props. It never mutates or
/// reorders `data`.
#[derive(Debug)]
pub struct DataTable<T> {
    pub(super) data: Vec<T>,
    pub(super) columns: Vec<Column<T>>,
    pub(super) visibility: ColumnVisibility,
    pub(super) is_loading: bool,
    pub(super) row_source: RowSource,
    pub(super) config: TableConfig,
    pub(super) page: Managed<PageState>,
    pub(super) sort: Managed<SortState>,
    /// Index into the visible columns of the keyboard-focused header.
    pub(super) header_cursor: Option<usize>,
    pub(super) callbacks: TableCallbacks,
}

impl<T: TableRow> DataTable<T> {
    pub fn new(props: TableProps<T>, callbacks: TableCallbacks) -> Self {
        check_column_ids(&props.columns);

        let pagination = props.pagination.unwrap_or(Control::Uncontrolled(PaginationProps {
            total_items: props.data.len(),
            page: 1,
            page_size: props.config.default_page_size,
        }));
        let page = match pagination {
            Control::Controlled(p) => Control::Controlled(page_state(p)),
            Control::Uncontrolled(p) => Control::Uncontrolled(page_state(p)),
        };

        Self {
            data: props.data,
            columns: props.columns,
            visibility: props.column_visibility,
            is_loading: props.is_loading,
            row_source: props.row_source,
            config: props.config,
            page: Managed::new(page),
            sort: Managed::new(props.sort),
            header_cursor: None,
            callbacks,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Columns not hidden by the visibility map, in declaration order.
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|c| self.visibility.is_visible(&c.id))
            .collect()
    }

    /// Number of rendered columns.
    pub fn column_count(&self) -> usize {
        self.visible_columns().len()
    }

    pub fn column_visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn page_state(&self) -> PageState {
        *self.page.get()
    }

    pub fn page_info(&self) -> PageInfo {
        self.page.get().info()
    }

    pub fn pagination_mode(&self) -> ControlMode {
        self.page.mode()
    }

    pub fn sort_state(&self) -> &SortState {
        self.sort.get()
    }

    pub fn sort_mode(&self) -> ControlMode {
        self.sort.mode()
    }

    /// Id of the keyboard-focused header, if any.
    pub fn focused_header(&self) -> Option<&str> {
        let cursor = self.header_cursor?;
        self.visible_columns().get(cursor).map(|c| c.id.as_str())
    }

    /// Rows shown on the current page.
    ///
    /// For [`RowSource::Client`] this is `data[start..=end]`, clamped to the
    /// data length. For [`RowSource::Server`] the data already is the page
    /// and only the page size caps it.
    pub fn visible_rows(&self) -> &[T] {
        let info = self.page_info();
        match self.row_source {
            RowSource::Client => {
                let range = info.range();
                let end = range.end.min(self.data.len());
                let start = range.start.min(end);
                &self.data[start..end]
            }
            RowSource::Server => {
                let end = self.data.len().min(info.page_size);
                &self.data[..end]
            }
        }
    }

    // -------------------------------------------------------------------------
    // Prop updates
    // -------------------------------------------------------------------------

    /// Replace the rows and the total item count.
    ///
    /// The current page is re-clamped against the new total.
    pub fn set_data(&mut self, data: Vec<T>, total_items: usize) {
        self.data = data;
        self.set_total_items(total_items);
    }

    /// Replace the rows, taking the total from their count.
    pub fn set_rows(&mut self, data: Vec<T>) {
        let total = data.len();
        self.set_data(data, total);
    }

    fn set_total_items(&mut self, total_items: usize) {
        let current = *self.page.get();
        let repaired = current.with_total_items(total_items);
        self.page.repair(repaired);
        if repaired.current_page != current.current_page {
            log::debug!(
                "[table] total {} moved page {} -> {}",
                total_items,
                current.current_page,
                repaired.current_page
            );
            if let Some(cb) = &mut self.callbacks.on_page_change {
                cb(repaired.current_page);
            }
        }
    }

    pub fn set_column_visibility(&mut self, visibility: ColumnVisibility) {
        self.visibility = visibility;
        self.clamp_header_cursor();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Accept the parent's sort state. Ignored unless sort is controlled.
    pub fn sync_sort(&mut self, sort: SortState) {
        if !self.sort.sync(sort) {
            log::warn!("[table] sync_sort ignored: sort state is uncontrolled");
        }
    }

    /// Accept the parent's pagination. Ignored unless pagination is
    /// controlled.
    pub fn sync_pagination(&mut self, props: PaginationProps) {
        if !self.page.sync(page_state(props)) {
            log::warn!("[table] sync_pagination ignored: pagination is uncontrolled");
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Activate a column header.
    ///
    /// Non-sortable, hidden and unknown columns are ignored. Otherwise the
    /// sort state moves per [`SortState::transition`] and `on_sort` fires.
    pub fn activate_header(&mut self, column_id: &str) -> EventResult {
        let Some(column) = self
            .columns
            .iter()
            .find(|c| c.id == column_id && self.visibility.is_visible(&c.id))
        else {
            return EventResult::Ignored;
        };

        let event = SortEvent::Activate {
            sortable: column.sortable,
            sort_field: column.sort_field.as_deref(),
        };
        let next = self.sort.get().transition(event);
        self.request_sort(next)
    }

    /// Drop back to unsorted. Ignored when nothing is sorted.
    pub fn clear_sort(&mut self) -> EventResult {
        let next = self.sort.get().transition(SortEvent::Clear);
        self.request_sort(next)
    }

    fn request_sort(&mut self, next: SortState) -> EventResult {
        let current = self.sort.get().clone();
        if !self.sort.request(next.clone()) {
            return EventResult::Ignored;
        }

        log::debug!("[table] sort {} -> {}", current, next);
        if let Some(cb) = &mut self.callbacks.on_sort {
            cb(&next);
        }
        EventResult::Consumed
    }

    /// Apply a navigation intent.
    ///
    /// Navigating to where the table already is changes nothing and fires
    /// no callback.
    pub fn navigate(&mut self, intent: PageIntent) -> EventResult {
        let current = *self.page.get();
        let next = pagination::apply(current, intent);
        if !self.page.request(next) {
            return EventResult::Ignored;
        }

        log::debug!(
            "[table] {:?}: page {} size {} -> page {} size {}",
            intent,
            current.current_page,
            current.page_size,
            next.current_page,
            next.page_size
        );
        if next.page_size != current.page_size {
            if let Some(cb) = &mut self.callbacks.on_page_size_change {
                cb(next.page_size);
            }
        }
        if next.current_page != current.current_page {
            if let Some(cb) = &mut self.callbacks.on_page_change {
                cb(next.current_page);
            }
        }
        EventResult::Consumed
    }

    /// Switch to the next configured page size.
    pub fn cycle_page_size(&mut self) -> EventResult {
        let next = self.config.next_page_size(self.page.get().page_size);
        self.navigate(PageIntent::SetPageSize(next))
    }

    /// Move the header cursor by `delta` visible columns.
    pub(super) fn move_header_cursor(&mut self, delta: isize) -> EventResult {
        let count = self.column_count();
        if count == 0 {
            return EventResult::Ignored;
        }
        let next = match self.header_cursor {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(count - 1),
        };
        if self.header_cursor == Some(next) {
            return EventResult::Ignored;
        }
        self.header_cursor = Some(next);
        EventResult::Consumed
    }

    pub(super) fn clear_header_cursor(&mut self) -> EventResult {
        if self.header_cursor.take().is_some() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn clamp_header_cursor(&mut self) {
        let count = self.column_count();
        self.header_cursor = match self.header_cursor {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }
}

fn page_state(props: PaginationProps) -> PageState {
    PageState::new(props.total_items, props.page, props.page_size)
}

/// Column ids must be unique. Duplicates are a caller bug: logged always,
/// asserted in debug builds.
fn check_column_ids<T>(columns: &[Column<T>]) {
    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = columns
        .iter()
        .map(|c| c.id.as_str())
        .filter(|id| !seen.insert(*id))
        .collect();
    if !duplicates.is_empty() {
        log::warn!("[table] duplicate column ids: {:?}", duplicates);
    }
    debug_assert!(
        duplicates.is_empty(),
        "duplicate column id(s): {duplicates:?}"
    );
}
