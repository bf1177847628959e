use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CtEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Terminal dimensions as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub columns: u16,
    pub rows: u16,
    /// Pixel width, when the terminal reports one (many report 0).
    pub pixel_width: Option<u16>,
}

impl ViewportSize {
    /// Query the current terminal.
    pub fn query() -> io::Result<Self> {
        match terminal::window_size() {
            Ok(size) => Ok(Self {
                columns: size.columns,
                rows: size.rows,
                pixel_width: (size.width > 0).then_some(size.width),
            }),
            Err(_) => {
                let (columns, rows) = terminal::size()?;
                Ok(Self {
                    columns,
                    rows,
                    pixel_width: None,
                })
            }
        }
    }

    pub fn screen(&self) -> Rect {
        Rect::from_size(self.columns, self.rows)
    }
}

/// Raw-mode, alternate-screen terminal with double-buffered output.
///
/// Restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` (forever when `None`) for input, then drain
    /// whatever else is already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CtEvent>> {
        let mut events = Vec::new();
        let ready = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };
        if ready {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Lay out and paint `root`, writing only changed cells.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("Terminal::render resized to {width}x{height}");
            self.current = Buffer::new(width, height);
            // Force a full repaint.
            self.previous = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(&self.last_layout)
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style != style {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                style = cell.style;
                // Reset dropped the colours too.
                fg = None;
                bg = None;
            }
            if fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                bg = Some(cell.bg);
            }

            write!(self.stdout, "{}", cell.ch)?;
            cursor_at = Some((x + char_width(cell.ch).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
