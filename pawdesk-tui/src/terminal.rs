use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal,
};
use pawdesk_table::target::Cell;
use pawdesk_table::{CellStyle, Surface};

/// Raw-mode alternate screen, double buffered through two [`Surface`]s.
pub struct Terminal {
    stdout: io::Stdout,
    current: Surface,
    previous: Surface,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        let (width, height) = match enter_screen(&mut stdout, terminal::size) {
            Ok(size) => size,
            Err(e) => {
                let _ = terminal::disable_raw_mode();
                return Err(e);
            }
        };

        Ok(Self {
            stdout,
            current: Surface::new(width, height),
            previous: Surface::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Events that arrive within `timeout`. Empty when none did.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while event::poll(wait)? {
            events.push(event::read()?);
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    /// Redraw the screen with `paint` and write out the changed cells.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Surface)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Surface::new(width, height);
            self.previous = Surface::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;

        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut last_style = CellStyle::plain();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            // The wide character before it already covers this cell
            if cell.wide_continuation {
                continue;
            }

            if last.is_none_or(|(lx, ly)| ly != y || lx + 1 != x) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if cell.style != last_style {
                apply_style(&mut self.stdout, cell)?;
                last_style = cell.style;
            }
            write!(self.stdout, "{}", cell.char)?;

            // A wide char moves the cursor two cells; force a move next time
            last = if pawdesk_table::text::char_width(cell.char) > 1 {
                None
            } else {
                Some((x, y))
            };
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn apply_style(out: &mut impl Write, cell: &Cell) -> io::Result<()> {
    let style = cell.style;
    queue!(out, SetAttribute(Attribute::Reset))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        leave_screen(&mut self.stdout);
        let _ = terminal::disable_raw_mode();
    }
}

/// Switch to the alternate screen and measure it. On failure the screen is
/// switched back before the error is returned.
fn enter_screen(
    out: &mut impl Write,
    size: impl FnOnce() -> io::Result<(u16, u16)>,
) -> io::Result<(u16, u16)> {
    let entered = execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )
    .and_then(|()| size());
    if entered.is_err() {
        leave_screen(out);
    }
    entered
}

fn leave_screen(out: &mut impl Write) {
    let _ = execute!(
        out,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
}
