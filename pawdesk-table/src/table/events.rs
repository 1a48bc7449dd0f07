//! Event handling for the data table.

use crate::column::TableRow;
use crate::pagination::PageIntent;

use super::state::DataTable;

/// Result of handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Input was ignored, try other handlers.
    Ignored,
    /// Input was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Keys the table reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Enter and Space activate a focused header.
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Inputs routed into [`DataTable::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableInput {
    /// A header was clicked.
    HeaderClick { column_id: String },
    /// A key was pressed while a header had focus.
    HeaderKey { column_id: String, key: Key },
    /// A key was pressed while the table had focus.
    Key(Key),
    /// A pagination control was used.
    Page(PageIntent),
    /// The page size selector advanced.
    CyclePageSize,
    /// Sorting was reset.
    ClearSort,
}

impl<T: TableRow> DataTable<T> {
    /// Route an input to the matching transition.
    ///
    /// | input                      | guard                | effect                 |
    /// |----------------------------|----------------------|------------------------|
    /// | header click               |                      | activate header        |
    /// | header key                 | Enter or Space       | activate header        |
    /// | Left / Right               | visible columns      | move header cursor     |
    /// | Enter / Space              | header focused       | activate focused       |
    /// | Escape                     | header focused       | clear header cursor    |
    /// | PageDown / PageUp          |                      | next / previous page   |
    /// | Home / End                 |                      | first / last page      |
    /// | page intent                |                      | navigate               |
    /// | clear sort                 | sorted               | unsorted               |
    pub fn handle(&mut self, input: TableInput) -> EventResult {
        match input {
            TableInput::HeaderClick { column_id } => self.activate_header(&column_id),
            TableInput::HeaderKey { column_id, key } if key.activates() => {
                self.activate_header(&column_id)
            }
            TableInput::HeaderKey { .. } => EventResult::Ignored,
            TableInput::Key(key) => self.on_key(key),
            TableInput::Page(intent) => self.navigate(intent),
            TableInput::CyclePageSize => self.cycle_page_size(),
            TableInput::ClearSort => self.clear_sort(),
        }
    }

    fn on_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Left => self.move_header_cursor(-1),
            Key::Right => self.move_header_cursor(1),
            Key::Escape => self.clear_header_cursor(),
            k if k.activates() => match self.focused_header().map(str::to_string) {
                Some(id) => self.activate_header(&id),
                None => EventResult::Ignored,
            },
            Key::PageDown => self.navigate(PageIntent::Next),
            Key::PageUp => self.navigate(PageIntent::Previous),
            Key::Home => self.navigate(PageIntent::First),
            Key::End => self.navigate(PageIntent::Last),
            _ => EventResult::Ignored,
        }
    }
}
