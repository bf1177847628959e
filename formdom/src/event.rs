use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEventKind,
};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// Input after hit testing against the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press; routing to a widget is up to the host.
    Key { key: Key, modifiers: Modifiers },
    /// Pointer press. `target` is the topmost clickable element under it.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved with no button held.
    MouseMove {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    /// Wheel; negative `delta` scrolls up.
    Scroll {
        target: Option<String>,
        x: u16,
        y: u16,
        delta: i16,
    },
    /// Terminal resized, in cells.
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        })
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<CtMouseButton> for MouseButton {
    fn from(button: CtMouseButton) -> Self {
        match button {
            CtMouseButton::Left => MouseButton::Left,
            CtMouseButton::Right => MouseButton::Right,
            CtMouseButton::Middle => MouseButton::Middle,
        }
    }
}

/// Turn a raw crossterm event into an [`Event`], hit testing pointer input
/// against the frame described by `root` and `layout`.
///
/// Key releases/repeats, focus changes, paste and unsupported keys yield
/// `None`.
pub fn translate(raw: &CtEvent, layout: &LayoutResult, root: &Element) -> Option<Event> {
    match raw {
        CtEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key {
            key: Key::from_code(key.code)?,
            modifiers: key.modifiers.into(),
        }),
        CtEvent::Mouse(mouse) => {
            let (x, y) = (mouse.column, mouse.row);
            let target = || hit_test(layout, root, x, y);
            match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    target: target(),
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Moved => Some(Event::MouseMove {
                    target: target(),
                    x,
                    y,
                }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    target: target(),
                    x,
                    y,
                    delta: -1,
                }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    target: target(),
                    x,
                    y,
                    delta: 1,
                }),
                _ => None,
            }
        }
        CtEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
