//! The walker dashboard.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};
use pawdesk_table::{
    CellStyle, ColumnVisibility, DataTable, Key, PageIntent, Rect, RenderTarget, SortState,
    Surface, TableCallbacks, TableConfig, TableInput, TableProps,
};

use crate::error::AppError;
use crate::records::{Walker, sort_walkers, walker_columns};
use crate::terminal::Terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const HELP: &str =
    "←/→ header  enter sort  c unsort  pgup/pgdn page  home/end  s page size  1-9 columns  q quit";

/// What the table reported through its callbacks.
#[derive(Debug, Clone, PartialEq)]
enum TableEvent {
    Sorted(SortState),
    PageChanged(usize),
    PageSizeChanged(usize),
}

/// A user action decoded from a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleColumn(usize),
    Table(TableInput),
}

pub struct Dashboard {
    /// Walkers in load order; sorting works on a copy.
    walkers: Vec<Walker>,
    table: DataTable<Walker>,
    events: Receiver<TableEvent>,
    visibility: ColumnVisibility,
    size: (u16, u16),
    quit: bool,
}

impl Dashboard {
    pub fn new(walkers: Vec<Walker>, config: TableConfig) -> Self {
        let (tx, events) = mpsc::channel();
        let sort_tx = tx.clone();
        let page_tx = tx.clone();
        let callbacks = TableCallbacks::new()
            .on_sort(move |s| {
                let _ = sort_tx.send(TableEvent::Sorted(s.clone()));
            })
            .on_page_change(move |p| {
                let _ = page_tx.send(TableEvent::PageChanged(p));
            })
            .on_page_size_change(move |s| {
                let _ = tx.send(TableEvent::PageSizeChanged(s));
            });

        let table = DataTable::new(
            TableProps::new(walkers.clone(), walker_columns()).config(config),
            callbacks,
        );
        log::info!("dashboard loaded {} walkers", walkers.len());

        Self {
            walkers,
            table,
            events,
            visibility: ColumnVisibility::new(),
            size: (0, 0),
            quit: false,
        }
    }

    pub fn table(&self) -> &DataTable<Walker> {
        &self.table
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        while !self.quit {
            self.size = terminal.size();
            terminal.draw(|surface| self.draw(surface))?;
            for event in terminal.poll(POLL_INTERVAL)? {
                self.on_event(event);
            }
        }
        log::info!("dashboard closed");
        Ok(())
    }

    fn on_event(&mut self, event: CrosstermEvent) {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key) {
                    self.apply(action);
                }
            }
            CrosstermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let area = table_area(self.size.0, self.size.1);
                let view = self.table.view();
                if let Some(id) = view.header_at(area, mouse.column, mouse.row) {
                    self.apply(Action::Table(TableInput::HeaderClick {
                        column_id: id.to_string(),
                    }));
                }
            }
            CrosstermEvent::Resize(width, height) => self.size = (width, height),
            _ => {}
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::ToggleColumn(index) => self.toggle_column(index),
            Action::Table(input) => {
                self.table.handle(input);
                self.drain_table_events();
            }
        }
    }

    fn toggle_column(&mut self, index: usize) {
        let Some(id) = self.table.columns().get(index).map(|c| c.id.clone()) else {
            return;
        };
        let visible = self.visibility.toggle(&id);
        log::debug!("column {} {}", id, if visible { "shown" } else { "hidden" });
        self.table.set_column_visibility(self.visibility.clone());
    }

    /// React to what the table reported. Sorting is the parent's job.
    fn drain_table_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                TableEvent::Sorted(sort) => {
                    log::info!("sorting walkers by {}", sort);
                    let mut rows = self.walkers.clone();
                    sort_walkers(&mut rows, &sort);
                    self.table.set_rows(rows);
                }
                TableEvent::PageChanged(page) => log::debug!("page {}", page),
                TableEvent::PageSizeChanged(size) => log::info!("page size {}", size),
            }
        }
    }

    pub fn draw(&self, surface: &mut Surface) {
        let area = surface.area();
        if area.is_empty() {
            return;
        }

        let title = format!("pawdesk · walkers ({})", self.walkers.len());
        surface.put_str(0, 0, &title, CellStyle::plain().bold());

        let mut status = format!("sort: {}", self.table.sort_state());
        let mut hidden: Vec<&str> = self.visibility.hidden().collect();
        if !hidden.is_empty() {
            hidden.sort_unstable();
            status.push_str(&format!("  hidden: {}", hidden.join(", ")));
        }
        surface.put_str(0, 1, &status, CellStyle::plain().dim());

        self.table
            .view()
            .draw(surface, table_area(area.width, area.height));

        if area.height > 3 {
            surface.put_str(0, area.height - 1, HELP, CellStyle::plain().dim());
        }
    }
}

/// Where the table sits: below the title and status lines, above help.
fn table_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 2, width, height.saturating_sub(3))
}

/// Decode a key press into an action.
pub fn map_key(event: KeyEvent) -> Option<Action> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let input = match event.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            return Some(Action::ToggleColumn(c as usize - '1' as usize));
        }
        KeyCode::Char('s') => TableInput::CyclePageSize,
        KeyCode::Char('c') => TableInput::ClearSort,
        KeyCode::Char('n') => TableInput::Page(PageIntent::Next),
        KeyCode::Char('p') => TableInput::Page(PageIntent::Previous),
        code => TableInput::Key(table_key(code)?),
    };
    Some(Action::Table(input))
}

fn table_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    })
}
