//! Logical key classification.
//!
//! Hosts deliver key names (`"ArrowLeft"`, `"a"`, `" "`); this module turns
//! them into a [`Key`] and then into the one editing [`Intent`] it triggers.

use core_types::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Space,
    /// A printable character.
    Char(char),

    // Keys the editor deliberately does nothing with.
    Enter,
    Escape,
    Tab,
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    NumLock,
    ScrollLock,

    /// Any other named key (`"F5"`, `"MediaPlay"`, ...).
    Other(String),
}

impl Key {
    /// Parse a host key name.
    ///
    /// Names of exactly one character are printable input; everything else
    /// must match a known key name or becomes [`Key::Other`].
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return if ch == ' ' { Key::Space } else { Key::Char(ch) };
        }
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Space" | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Shift" => Key::Shift,
            "Control" => Key::Control,
            "Alt" => Key::Alt,
            "Meta" => Key::Meta,
            "CapsLock" => Key::CapsLock,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Insert" => Key::Insert,
            "NumLock" => Key::NumLock,
            "ScrollLock" => Key::ScrollLock,
            other => Key::Other(other.to_string()),
        }
    }
}

/// What a key asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Move(Direction),
    /// Both Backspace and Delete remove the character before the cursor.
    DeleteBackward,
    Insert(char),
    Ignore,
}

impl Intent {
    pub fn from_key(key: &Key) -> Intent {
        match key {
            Key::Left => Intent::Move(Direction::Left),
            Key::Right => Intent::Move(Direction::Right),
            Key::Up => Intent::Move(Direction::Up),
            Key::Down => Intent::Move(Direction::Down),
            Key::Backspace | Key::Delete => Intent::DeleteBackward,
            Key::Space => Intent::Insert(' '),
            Key::Char(ch) if !ch.is_control() => Intent::Insert(*ch),
            Key::Char(_)
            | Key::Enter
            | Key::Escape
            | Key::Tab
            | Key::Shift
            | Key::Control
            | Key::Alt
            | Key::Meta
            | Key::CapsLock
            | Key::PageUp
            | Key::PageDown
            | Key::Home
            | Key::End
            | Key::Insert
            | Key::NumLock
            | Key::ScrollLock
            | Key::Other(_) => Intent::Ignore,
        }
    }
}

/// Pointer gesture phase as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Release,
}
