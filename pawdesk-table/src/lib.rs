//! Paginated, sortable data table for the pawdesk admin dashboard.
//!
//! The crate is split the same way the table is used:
//!
//! - [`pagination`] derives page metadata and navigation transitions.
//! - [`sort`] holds the sort state machine.
//! - [`column`] describes how a column obtains the value of each cell.
//! - [`table`] ties them together into a [`DataTable`] that slices rows,
//!   reports sort and page changes upward and produces a [`TableView`].
//! - [`target`] draws a view into an explicitly passed [`RenderTarget`].

pub mod column;
pub mod config;
pub mod control;
pub mod error;
pub mod pagination;
pub mod sort;
pub mod table;
pub mod target;
pub mod text;
pub mod visibility;

pub use column::{Accessor, CellValue, Column, ColumnWidth, TableRow};
pub use config::TableConfig;
pub use control::{Control, ControlMode};
pub use error::ConfigError;
pub use pagination::{PageInfo, PageIntent, PageItem, PageState};
pub use sort::{SortDirection, SortEvent, SortState};
pub use table::{
    BodyCell, BodyRow, DataTable, EventResult, HeaderCell, Key, PaginationProps, PaginationView,
    Placeholder, RowSource, TableBody, TableCallbacks, TableInput, TableProps, TableView,
};
pub use target::{CellStyle, Rect, RenderTarget, Surface};
pub use visibility::ColumnVisibility;
