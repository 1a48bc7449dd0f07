//! Column descriptors and cell values.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// CellValue
// =============================================================================

/// The value displayed in one cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("yes"),
            CellValue::Bool(false) => f.write_str("no"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n.into())
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Integer(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Float(n.into())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(v: Option<V>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

// =============================================================================
// TableRow Trait
// =============================================================================

/// Rows whose fields can be read by name.
///
/// # Example
///
/// ```
/// use pawdesk_table::{CellValue, TableRow};
///
/// struct Walker {
///     id: u32,
///     name: String,
///     email: String,
/// }
///
/// impl TableRow for Walker {
///     fn field(&self, name: &str) -> CellValue {
///         match name {
///             "name" => self.name.as_str().into(),
///             "email" => self.email.as_str().into(),
///             _ => CellValue::Empty,
///         }
///     }
///
///     fn key(&self) -> Option<String> {
///         Some(self.id.to_string())
///     }
/// }
/// ```
pub trait TableRow {
    /// Value of the named field, or [`CellValue::Empty`] if there is none.
    fn field(&self, name: &str) -> CellValue;

    /// Stable key for this row. Rows without one are keyed by position.
    fn key(&self) -> Option<String> {
        None
    }
}

// =============================================================================
// Column
// =============================================================================

type MapFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type RenderFn<T> = Arc<dyn Fn(&T, usize) -> CellValue + Send + Sync>;

/// How a column obtains the value of a cell.
pub enum Accessor<T> {
    /// Read a named field through [`TableRow::field`].
    Field(String),
    /// Compute the value from the row.
    Map(MapFn<T>),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(name.clone()),
            Accessor::Map(f) => Accessor::Map(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => write!(f, "Field({name:?})"),
            Accessor::Map(_) => write!(f, "Map(..)"),
        }
    }
}

/// Column width specification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Sized to the widest visible cell, capped by the table config.
    #[default]
    Auto,
}

/// A table column definition.
pub struct Column<T> {
    /// Unique identifier within one table.
    pub id: String,
    /// Header label.
    pub header: String,
    pub accessor: Option<Accessor<T>>,
    /// Field reported in [`SortState`](crate::SortState) when this column
    /// is sorted.
    pub sort_field: Option<String>,
    pub sortable: bool,
    /// Overrides the accessor when set.
    pub renderer: Option<RenderFn<T>>,
    pub width: ColumnWidth,
}

impl<T> Column<T> {
    /// Create a new column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            sort_field: None,
            sortable: false,
            renderer: None,
            width: ColumnWidth::Auto,
        }
    }

    /// Read cells from the named field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Some(Accessor::Field(name.into()));
        self
    }

    /// Compute cells from the row.
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        self.accessor = Some(Accessor::Map(Arc::new(f)));
        self
    }

    /// Render cells with a custom function taking the row and its index.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, usize) -> CellValue + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Make the column sortable by `sort_field`.
    pub fn sortable(mut self, sort_field: impl Into<String>) -> Self {
        self.sortable = true;
        self.sort_field = Some(sort_field.into());
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Value of this column's cell for `row`.
    ///
    /// The renderer wins over the accessor. A column with neither yields an
    /// empty cell.
    pub fn cell(&self, row: &T, row_index: usize) -> CellValue
    where
        T: TableRow,
    {
        if let Some(render) = &self.renderer {
            return render(row, row_index);
        }
        match &self.accessor {
            Some(Accessor::Field(name)) => row.field(name),
            Some(Accessor::Map(f)) => f(row),
            None => CellValue::Empty,
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sort_field: self.sort_field.clone(),
            sortable: self.sortable,
            renderer: self.renderer.clone(),
            width: self.width,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sort_field", &self.sort_field)
            .field("sortable", &self.sortable)
            .field("renderer", &self.renderer.as_ref().map(|_| ".."))
            .field("width", &self.width)
            .finish()
    }
}
