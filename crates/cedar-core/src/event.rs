#![forbid(unsafe_code)]

//! Input event types.
//!
//! Only the windowing glue consumes these; the layout core never sees input.
//! Keys are the subset of the named key set a terminal can actually report.

use bitflags::bitflags;
use crossterm::event as cte;

/// Input event read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press (repeats included, releases dropped).
    Key(KeyEvent),
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

impl Event {
    /// Convert a crossterm event, returning `None` for anything Cedar does
    /// not model (mouse, paste, key releases, exotic keys).
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) if key.kind != cte::KeyEventKind::Release => {
                KeyEvent::from_crossterm(key).map(Self::Key)
            }
            cte::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            cte::Event::FocusGained => Some(Self::Focus(true)),
            cte::Event::FocusLost => Some(Self::Focus(false)),
            _ => None,
        }
    }
}

/// A named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Tab,
    BackTab,
    Enter,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    LeftArrow,
    UpArrow,
    RightArrow,
    DownArrow,
    Insert,
    Delete,
    /// Function key F1-F24.
    F(u8),
    /// Any other printable character, as typed (case preserved).
    Char(char),
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key with no modifiers.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check for a character key, ignoring ASCII case.
    pub fn is_char_ignore_case(&self, ch: char) -> bool {
        matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&ch))
    }

    fn from_crossterm(event: cte::KeyEvent) -> Option<Self> {
        let key = map_key_code(event.code)?;
        Some(Self::new(key).with_modifiers(map_modifiers(event.modifiers)))
    }
}

fn map_key_code(code: cte::KeyCode) -> Option<Key> {
    let key = match code {
        cte::KeyCode::Backspace => Key::Backspace,
        cte::KeyCode::Tab => Key::Tab,
        cte::KeyCode::BackTab => Key::BackTab,
        cte::KeyCode::Enter => Key::Enter,
        cte::KeyCode::Esc => Key::Escape,
        cte::KeyCode::Char(' ') => Key::Space,
        cte::KeyCode::Char(c) => Key::Char(c),
        cte::KeyCode::PageUp => Key::PageUp,
        cte::KeyCode::PageDown => Key::PageDown,
        cte::KeyCode::End => Key::End,
        cte::KeyCode::Home => Key::Home,
        cte::KeyCode::Left => Key::LeftArrow,
        cte::KeyCode::Up => Key::UpArrow,
        cte::KeyCode::Right => Key::RightArrow,
        cte::KeyCode::Down => Key::DownArrow,
        cte::KeyCode::Insert => Key::Insert,
        cte::KeyCode::Delete => Key::Delete,
        cte::KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut mapped = Modifiers::empty();
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        mapped |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        mapped |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        mapped |= Modifiers::CTRL;
    }
    if modifiers.intersects(
        cte::KeyModifiers::SUPER | cte::KeyModifiers::HYPER | cte::KeyModifiers::META,
    ) {
        mapped |= Modifiers::SUPER;
    }
    mapped
}
