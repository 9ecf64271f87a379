//! Input: discrete key events mapped to roll intents, and the latch that holds them.
//!
//! # Invariants
//! - The core consumes `InputEvent`s, never raw device events.
//! - Intents are sticky: key release never clears them, only roll completion does.
//! - Quit travels on its own channel and is never latched as a direction.

pub mod event;
pub mod latch;

pub use event::{InputEvent, ParseError, map_key, parse_keys, parse_script, require_key};
pub use latch::InputLatch;

pub fn crate_info() -> &'static str {
    "rollblock-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
