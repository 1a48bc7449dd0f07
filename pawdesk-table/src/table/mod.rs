//! Data table - paginated, sortable rows with per-column visibility.
//!
//! The table slices rows for the current page and keeps its own sort and
//! page state, but never reorders or fetches data. Sort and page changes are
//! reported through [`TableCallbacks`] so the parent can sort, re-slice or
//! re-fetch and hand the table fresh rows.

mod events;
mod render;
mod state;

pub use events::{EventResult, Key, TableInput};
pub use render::{
    BodyCell, BodyRow, HeaderCell, PaginationView, Placeholder, TableBody, TableView,
};
pub use state::DataTable;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::config::TableConfig;
use crate::control::Control;
use crate::sort::SortState;
use crate::visibility::ColumnVisibility;

// =============================================================================
// Props
// =============================================================================

/// Pagination input from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationProps {
    pub total_items: usize,
    /// Requested page (1-based); clamped by the table.
    pub page: usize,
    pub page_size: usize,
}

/// Where the rows passed to the table come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowSource {
    /// `data` holds every row; the table slices out the current page.
    #[default]
    Client,
    /// `data` already is the current page and `total_items` is the grand
    /// total reported by the server.
    Server,
}

/// Everything a [`DataTable`] is built from.
pub struct TableProps<T> {
    pub data: Vec<T>,
    pub columns: Vec<Column<T>>,
    /// Defaults to an uncontrolled first page over `data.len()` items.
    pub pagination: Option<Control<PaginationProps>>,
    pub sort: Control<SortState>,
    pub is_loading: bool,
    pub column_visibility: ColumnVisibility,
    pub row_source: RowSource,
    pub config: TableConfig,
}

impl<T> TableProps<T> {
    pub fn new(data: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self {
            data,
            columns,
            pagination: None,
            sort: Control::default(),
            is_loading: false,
            column_visibility: ColumnVisibility::default(),
            row_source: RowSource::Client,
            config: TableConfig::default(),
        }
    }

    /// Table-owned pagination starting at `props`.
    pub fn pagination(mut self, props: PaginationProps) -> Self {
        self.pagination = Some(Control::Uncontrolled(props));
        self
    }

    /// Parent-owned pagination; see [`DataTable::sync_pagination`].
    pub fn controlled_pagination(mut self, props: PaginationProps) -> Self {
        self.pagination = Some(Control::Controlled(props));
        self
    }

    pub fn sort(mut self, sort: Control<SortState>) -> Self {
        self.sort = sort;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn column_visibility(mut self, visibility: ColumnVisibility) -> Self {
        self.column_visibility = visibility;
        self
    }

    pub fn row_source(mut self, source: RowSource) -> Self {
        self.row_source = source;
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }
}

// =============================================================================
// Callbacks
// =============================================================================

type SortCallback = Box<dyn FnMut(&SortState)>;
type Callback<A> = Box<dyn FnMut(A)>;

/// Change notifications sent to the parent.
#[derive(Default)]
pub struct TableCallbacks {
    pub(crate) on_sort: Option<SortCallback>,
    pub(crate) on_page_change: Option<Callback<usize>>,
    pub(crate) on_page_size_change: Option<Callback<usize>>,
}

impl TableCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new sort state on every sort change.
    pub fn on_sort(mut self, f: impl FnMut(&SortState) + 'static) -> Self {
        self.on_sort = Some(Box::new(f));
        self
    }

    /// Called with the new page number whenever it changes.
    pub fn on_page_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    /// Called with the new page size whenever it changes.
    pub fn on_page_size_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_page_size_change = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for TableCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCallbacks")
            .field("on_sort", &self.on_sort.is_some())
            .field("on_page_change", &self.on_page_change.is_some())
            .field("on_page_size_change", &self.on_page_size_change.is_some())
            .finish()
    }
}
