//! Render targets.
//!
//! Tables never reach for a shared screen. The caller hands a
//! [`RenderTarget`] to [`TableView::draw`](crate::TableView::draw), so any
//! number of tables can render into independent surfaces.

use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Saturates at `u16::MAX`.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Text attributes of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    /// Swap foreground and background, used for focus.
    pub reverse: bool,
}

impl CellStyle {
    pub const fn plain() -> Self {
        Self {
            bold: false,
            dim: false,
            underline: false,
            reverse: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

/// Something a table can draw into.
pub trait RenderTarget {
    /// The drawable area.
    fn area(&self) -> Rect;

    /// Write `text` starting at `(x, y)`, clipped to the area.
    ///
    /// Returns the number of cells written.
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16;
}

// =============================================================================
// Surface
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub style: CellStyle,
    /// Second half of a wide character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            style: CellStyle::plain(),
            wide_continuation: false,
        }
    }
}

/// An in-memory grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The text of row `y` with trailing spaces removed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let row = &self.cells[start..start + self.width as usize];
        let text: String = row
            .iter()
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect();
        text.trim_end().to_string()
    }

    /// All rows, one line each.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Cells that differ from `other`, for incremental terminal updates.
    pub fn diff<'a>(&'a self, other: &'a Surface) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }
}

impl RenderTarget for Surface {
    fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        if y >= self.height {
            return 0;
        }
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > self.width {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    char: ch,
                    style,
                    wide_continuation: false,
                },
            );
            for extra in 1..w {
                self.set(
                    cx + extra,
                    y,
                    Cell {
                        char: ' ',
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
        cx - x
    }
}
