//! Table view model and drawing.

use crate::column::{CellValue, ColumnWidth, TableRow};
use crate::config::MIN_COLUMN_WIDTH;
use crate::pagination::{self, PageInfo, PageItem};
use crate::sort::SortDirection;
use crate::target::{CellStyle, Rect, RenderTarget};
use crate::text::{center_in_width, display_width, fit_to_width, truncate_to_width};

use super::state::DataTable;

/// Space between columns.
const COLUMN_GAP: u16 = 1;

// =============================================================================
// View model
// =============================================================================

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column_id: String,
    pub label: String,
    pub sortable: bool,
    /// Direction if this column is the sorted one.
    pub sort: Option<SortDirection>,
    /// Holds keyboard focus.
    pub focused: bool,
    pub width: ColumnWidth,
}

impl HeaderCell {
    /// `aria-sort` value for this header.
    pub fn aria_sort(&self) -> &'static str {
        match self.sort {
            Some(direction) => direction.aria(),
            None => "none",
        }
    }

    fn indicator(&self) -> &'static str {
        match self.sort {
            Some(SortDirection::Asc) => " ▲",
            Some(SortDirection::Desc) => " ▼",
            None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub column_id: String,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// The row's own key, or its absolute index.
    pub key: String,
    /// Absolute index into the table data.
    pub index: usize,
    pub cells: Vec<BodyCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<BodyRow>),
    /// A single row spanning every visible column.
    Placeholder {
        kind: Placeholder,
        label: String,
        colspan: usize,
    },
}

impl TableBody {
    pub fn rows(&self) -> &[BodyRow] {
        match self {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder { .. } => &[],
        }
    }
}

/// Footer of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub info: PageInfo,
    pub pages: Vec<PageItem>,
    /// e.g. `21–25 of 25`.
    pub summary: String,
    pub page_size_options: Vec<usize>,
}

/// Everything needed to present a table, independent of any output.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    /// Number of rendered columns (`aria-colcount`).
    pub col_count: usize,
    pub pagination: PaginationView,
    pub is_loading: bool,
    pub max_column_width: u16,
}

impl<T: TableRow> DataTable<T> {
    /// Build the view for the current state.
    pub fn view(&self) -> TableView {
        let columns = self.visible_columns();
        let sort = self.sort_state();
        let focused = self.focused_header();

        let header: Vec<HeaderCell> = columns
            .iter()
            .map(|c| HeaderCell {
                column_id: c.id.clone(),
                label: c.header.clone(),
                sortable: c.sortable,
                sort: c
                    .sort_field
                    .as_deref()
                    .filter(|_| c.sortable)
                    .and_then(|f| sort.direction_for(f)),
                focused: focused == Some(c.id.as_str()),
                width: c.width,
            })
            .collect();

        let info = self.page_info();
        let rows = self.visible_rows();

        let body = if rows.is_empty() {
            let (kind, label) = if self.is_loading {
                (Placeholder::Loading, self.config.loading_label.clone())
            } else {
                (Placeholder::Empty, self.config.empty_label.clone())
            };
            TableBody::Placeholder {
                kind,
                label,
                colspan: columns.len(),
            }
        } else {
            TableBody::Rows(
                rows.iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let index = info.start_index + i;
                        BodyRow {
                            key: row.key().unwrap_or_else(|| index.to_string()),
                            index,
                            cells: columns
                                .iter()
                                .map(|c| BodyCell {
                                    column_id: c.id.clone(),
                                    value: c.cell(row, i),
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            )
        };

        log::trace!(
            "[table] view: {} columns, {} rows, page {}/{}",
            columns.len(),
            body.rows().len(),
            info.current_page,
            info.total_pages
        );

        TableView {
            col_count: header.len(),
            header,
            body,
            pagination: PaginationView {
                info,
                pages: pagination::page_window(&info, self.config.page_window_siblings),
                summary: info.summary(),
                page_size_options: self.config.page_size_options.clone(),
            },
            is_loading: self.is_loading,
            max_column_width: self.config.max_column_width,
        }
    }
}

// =============================================================================
// Drawing
// =============================================================================

impl TableView {
    /// Width of each rendered column in terminal cells.
    pub fn column_widths(&self) -> Vec<u16> {
        let cap = self.max_column_width.max(MIN_COLUMN_WIDTH) as usize;
        self.header
            .iter()
            .enumerate()
            .map(|(col, h)| match h.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Auto => {
                    // Leave room for the sort indicator on sortable headers
                    let label = display_width(&h.label) + if h.sortable { 2 } else { 0 };
                    let content = self
                        .body
                        .rows()
                        .iter()
                        .filter_map(|r| r.cells.get(col))
                        .map(|c| display_width(&c.value.to_string()))
                        .max()
                        .unwrap_or(0);
                    label.max(content).clamp(MIN_COLUMN_WIDTH as usize, cap) as u16
                }
            })
            .collect()
    }

    /// Draw into `area` of `target`. Returns the number of lines used.
    pub fn draw(&self, target: &mut dyn RenderTarget, area: Rect) -> u16 {
        let area = clip(area, target.area());
        if area.is_empty() {
            return 0;
        }

        let widths = self.column_widths();
        let table_width = (widths.iter().map(|&w| w as usize).sum::<usize>()
            + COLUMN_GAP as usize * widths.len().saturating_sub(1))
        .max(1);
        let rule = "─".repeat(table_width);
        let mut y = area.y;

        // Header
        let mut x = area.x;
        for (h, &w) in self.header.iter().zip(&widths) {
            let text = fit_to_width(&format!("{}{}", h.label, h.indicator()), w as usize);
            let mut style = CellStyle::plain().bold();
            if h.sortable {
                style = style.underline();
            }
            if h.focused {
                style = style.reverse();
            }
            x = put_clipped(target, area, x, y, &text, style).saturating_add(COLUMN_GAP);
        }
        y += 1;
        if y >= area.bottom() {
            return y - area.y;
        }
        put_clipped(target, area, area.x, y, &rule, CellStyle::plain().dim());
        y += 1;

        // Body
        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    if y >= area.bottom() {
                        return y - area.y;
                    }
                    let mut x = area.x;
                    for (cell, &w) in row.cells.iter().zip(&widths) {
                        let text = fit_to_width(&cell.value.to_string(), w as usize);
                        x = put_clipped(target, area, x, y, &text, CellStyle::plain())
                            .saturating_add(COLUMN_GAP);
                    }
                    y += 1;
                }
            }
            TableBody::Placeholder { kind, label, .. } => {
                if y >= area.bottom() {
                    return y - area.y;
                }
                let style = match kind {
                    Placeholder::Loading => CellStyle::plain().dim(),
                    Placeholder::Empty => CellStyle::plain(),
                };
                let text = center_in_width(label, table_width);
                put_clipped(target, area, area.x, y, &text, style);
                y += 1;
            }
        }

        // Footer
        if y >= area.bottom() {
            return y - area.y;
        }
        put_clipped(target, area, area.x, y, &rule, CellStyle::plain().dim());
        y += 1;
        if y >= area.bottom() {
            return y - area.y;
        }
        put_clipped(target, area, area.x, y, &self.footer_text(), CellStyle::plain());
        y += 1;

        y - area.y
    }

    /// Id of the header under `(x, y)` when this view is drawn into `area`.
    pub fn header_at(&self, area: Rect, x: u16, y: u16) -> Option<&str> {
        if y != area.y || !area.contains(x, y) {
            return None;
        }
        let mut left = area.x;
        for (h, w) in self.header.iter().zip(self.column_widths()) {
            let right = left.saturating_add(w);
            if x >= left && x < right {
                return Some(&h.column_id);
            }
            left = right.saturating_add(COLUMN_GAP);
        }
        None
    }

    /// `‹ 1 … 4 [5] 6 … 10 ›  41–50 of 100  10/page`
    pub fn footer_text(&self) -> String {
        let info = &self.pagination.info;
        let mut parts = Vec::with_capacity(self.pagination.pages.len() + 2);
        parts.push(if info.has_previous_page { "‹" } else { " " }.to_string());
        for item in &self.pagination.pages {
            parts.push(match item {
                PageItem::Page {
                    number,
                    current: true,
                } => format!("[{number}]"),
                PageItem::Page { number, .. } => number.to_string(),
                PageItem::Ellipsis => "…".to_string(),
            });
        }
        parts.push(if info.has_next_page { "›" } else { " " }.to_string());

        let mut footer = format!(
            "{}  {}  {}/page",
            parts.join(" "),
            self.pagination.summary,
            info.page_size
        );
        if self.is_loading {
            footer.push_str("  loading…");
        }
        footer
    }
}

fn clip(area: Rect, bounds: Rect) -> Rect {
    let x = area.x.max(bounds.x);
    let y = area.y.max(bounds.y);
    let right = area.right().min(bounds.right());
    let bottom = area.bottom().min(bounds.bottom());
    Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
}

/// Write `text` at `(x, y)` without crossing the right edge of `area`.
/// Returns the x position after the text.
fn put_clipped(
    target: &mut dyn RenderTarget,
    area: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) -> u16 {
    let avail = area.right().saturating_sub(x) as usize;
    if avail == 0 || !area.contains(x, y) {
        return x.saturating_add(display_width(text) as u16);
    }
    let text = truncate_to_width(text, avail);
    target.put_str(x, y, &text, style);
    x.saturating_add(display_width(&text) as u16)
}
