#![forbid(unsafe_code)]

//! Terminal surface provider.
//!
//! [`Surface`] is the narrow interface the layout core paints through.
//! [`TerminalSurface`] implements it over any [`Write`] with crossterm
//! commands, tracking cursor and color state so a frame only emits the
//! escape sequences that actually change something.
//!
//! All output is buffered; nothing reaches the terminal until
//! [`Surface::flush`].

use std::io::{self, BufWriter, Stdout, Write};

use cedar_core::{Color, Size};
use crossterm::{cursor, style, terminal};

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Something cells can be painted onto.
pub trait Surface {
    /// Current physical size in cells.
    fn size(&self) -> io::Result<Size>;

    /// Erase everything on the surface.
    fn clear(&mut self) -> io::Result<()>;

    /// Move the write position to column `x`, row `y`.
    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;

    fn set_background(&mut self, color: Color) -> io::Result<()>;

    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    /// Write one character at the write position and advance it one column.
    fn write_char(&mut self, ch: char) -> io::Result<()>;

    /// Push buffered output to the device.
    fn flush(&mut self) -> io::Result<()>;
}

/// A crossterm-backed surface.
pub struct TerminalSurface<W: Write> {
    writer: BufWriter<W>,
    /// Fixed size reported instead of querying the terminal.
    fixed_size: Option<Size>,
    /// Last known cursor position. None = unknown.
    cursor: Option<(u16, u16)>,
    /// Current colors. None = unknown.
    fg: Option<Color>,
    bg: Option<Color>,
}

impl TerminalSurface<Stdout> {
    /// A surface writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            fixed_size: None,
            cursor: None,
            fg: None,
            bg: None,
        }
    }

    /// Report `size` instead of asking the terminal.
    ///
    /// Useful when the writer is not a tty (pipes, captures, tests).
    #[must_use]
    pub fn with_fixed_size(mut self, size: Size) -> Self {
        self.fixed_size = Some(size);
        self
    }

    /// Forget tracked cursor and color state, forcing the next commands to
    /// be emitted in full.
    pub fn invalidate(&mut self) {
        self.cursor = None;
        self.fg = None;
        self.bg = None;
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> io::Result<Size> {
        match self.fixed_size {
            Some(size) => Ok(size),
            None => terminal::size().map(Size::from),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        crossterm::queue!(self.writer, terminal::Clear(terminal::ClearType::All))?;
        self.cursor = None;
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            crossterm::queue!(self.writer, cursor::MoveTo(x, y))?;
            self.cursor = Some((x, y));
        }
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> io::Result<()> {
        if self.bg != Some(color) {
            crossterm::queue!(self.writer, style::SetBackgroundColor(color.into()))?;
            self.bg = Some(color);
        }
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        if self.fg != Some(color) {
            crossterm::queue!(self.writer, style::SetForegroundColor(color.into()))?;
            self.fg = Some(color);
        }
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        crossterm::queue!(self.writer, style::Print(ch))?;
        self.cursor = self.cursor.map(|(x, y)| (x.saturating_add(1), y));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
