use rollblock_common::Direction;
use serde::{Deserialize, Serialize};

/// A discrete input event delivered to the core once per key-down transition.
///
/// Device layers (window toolkits, terminals, scripts) translate their own key
/// codes into these; nothing downstream sees raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Left,
    Right,
    Up,
    Down,
    /// Terminate the run immediately.
    Quit,
}

impl InputEvent {
    /// The roll direction this event requests, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Quit => None,
        }
    }
}

impl From<Direction> for InputEvent {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("unexpected `{ch}` in move token `{token}`")]
    BadToken { token: String, ch: char },
}

/// Map a named key to an input event.
///
/// Arrow keys and WASD roll the block; Escape and Q quit. Names are
/// case-insensitive. Unbound keys map to `None`.
pub fn map_key(name: &str) -> Option<InputEvent> {
    match name.trim().to_ascii_lowercase().as_str() {
        "left" | "arrowleft" | "a" => Some(InputEvent::Left),
        "right" | "arrowright" | "d" => Some(InputEvent::Right),
        "up" | "arrowup" | "w" => Some(InputEvent::Up),
        "down" | "arrowdown" | "s" => Some(InputEvent::Down),
        "escape" | "esc" | "q" | "quit" => Some(InputEvent::Quit),
        _ => None,
    }
}

fn letter_event(ch: char) -> Option<InputEvent> {
    match ch.to_ascii_uppercase() {
        'L' => Some(InputEvent::Left),
        'R' => Some(InputEvent::Right),
        'U' => Some(InputEvent::Up),
        'D' => Some(InputEvent::Down),
        'Q' => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Parse a move script into a sequence of key presses.
///
/// Tokens are separated by whitespace or commas. A token is either a key name
/// understood by [`map_key`] (`left`, `ArrowUp`, `esc`) or a run of letters
/// from `L R U D Q`, so `"LLDU"`, `"l l d u"` and `"left,left,down,up"` are
/// equivalent. Single letters always use the letter code, so `d` is Down.
pub fn parse_script(script: &str) -> Result<Vec<InputEvent>, ParseError> {
    let mut events = Vec::new();
    for token in script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if token.len() > 1 {
            if let Some(event) = map_key(token) {
                events.push(event);
                continue;
            }
        }
        for ch in token.chars() {
            let event = letter_event(ch).ok_or_else(|| ParseError::BadToken {
                token: token.to_string(),
                ch,
            })?;
            events.push(event);
        }
    }
    Ok(events)
}

/// Like [`map_key`], but unbound keys are an error.
pub fn require_key(name: &str) -> Result<InputEvent, ParseError> {
    map_key(name).ok_or_else(|| ParseError::UnknownKey(name.to_string()))
}

/// Resolve a list of key names, failing on the first unbound one.
pub fn parse_keys<S: AsRef<str>>(names: &[S]) -> Result<Vec<InputEvent>, ParseError> {
    names.iter().map(|name| require_key(name.as_ref())).collect()
}
