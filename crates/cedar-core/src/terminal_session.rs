#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] is the process-wide terminal context: the program's
//! entry point creates exactly one, hands it to whatever needs input, and
//! drops it on the way out. Creating it enters raw mode and enables the
//! requested modes; dropping it undoes them in reverse order.
//!
//! Cleanup also runs from a panic hook and, on unix, when SIGINT or SIGTERM
//! arrives, so the shell never inherits a raw, cursorless terminal.
//!
//! # Cleanup Order
//!
//! 1. Disable mouse capture (if enabled)
//! 2. Show cursor (always)
//! 3. Leave alternate screen (if enabled)
//! 4. Exit raw mode (always)
//! 5. Flush stdout

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crate::event::Event;
use crate::geometry::Size;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Terminal modes to enable for the session.
///
/// Everything defaults to `false`: a default session is raw mode only.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer, restoring scrollback on exit.
    pub alternate_screen: bool,
    /// Hide the text cursor while the session lives.
    pub hide_cursor: bool,
    /// Capture mouse events.
    pub mouse_capture: bool,
}

impl SessionOptions {
    /// Options for a full-screen UI: alternate screen, hidden cursor.
    pub fn fullscreen() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            ..Self::default()
        }
    }
}

/// An active raw-mode terminal session.
///
/// Only one should exist at a time.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    alternate_screen_enabled: bool,
    cursor_hidden: bool,
    mouse_enabled: bool,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested modes.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or any requested mode cannot be enabled.
    /// Modes enabled before the failure are rolled back by `Drop`.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();
        let _span = crate::info_span!("cedar.session.init").entered();

        crossterm::terminal::enable_raw_mode()?;
        crate::info!("terminal raw mode enabled");

        let mut session = Self {
            options: options.clone(),
            alternate_screen_enabled: false,
            cursor_hidden: false,
            mouse_enabled: false,
            #[cfg(unix)]
            signal_guard: None,
        };
        #[cfg(unix)]
        {
            session.signal_guard = Some(SignalGuard::new()?);
        }

        let mut stdout = io::stdout();

        if options.alternate_screen {
            crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
            session.alternate_screen_enabled = true;
            crate::info!("alternate screen enabled");
        }

        if options.hide_cursor {
            crossterm::execute!(stdout, crossterm::cursor::Hide)?;
            session.cursor_hidden = true;
        }

        if options.mouse_capture {
            crossterm::execute!(stdout, crossterm::event::EnableMouseCapture)?;
            session.mouse_enabled = true;
            crate::info!("mouse capture enabled");
        }

        Ok(session)
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> io::Result<Size> {
        crossterm::terminal::size().map(Size::from)
    }

    /// Wait up to `timeout` for input. `Ok(true)` means an event is ready.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Read the next event, blocking until one arrives.
    ///
    /// Returns `Ok(None)` for input Cedar does not model.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }

    /// Show or hide the cursor for the rest of the session.
    pub fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            crossterm::execute!(io::stdout(), crossterm::cursor::Show)?;
        } else {
            crossterm::execute!(io::stdout(), crossterm::cursor::Hide)?;
        }
        self.cursor_hidden = !visible;
        Ok(())
    }

    pub fn cursor_visible(&self) -> bool {
        !self.cursor_hidden
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn cleanup(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        let mut stdout = io::stdout();

        if self.mouse_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
            self.mouse_enabled = false;
        }

        let _ = crossterm::execute!(
            stdout,
            crossterm::style::ResetColor,
            crossterm::cursor::Show
        );
        self.cursor_hidden = false;

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            crate::info!("alternate screen disabled");
        }

        let _ = crossterm::terminal::disable_raw_mode();
        crate::info!("terminal raw mode disabled");

        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();

    let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
    let _ = crossterm::execute!(stdout, crossterm::style::ResetColor);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                crate::warn!(signal, "termination signal received, cleaning up");
                best_effort_cleanup();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
