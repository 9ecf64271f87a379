//! Shared vocabulary for the rolling-block engine.
//!
//! # Invariants
//! - `Direction` and `Orientation` are closed enums; every pair is meaningful.
//! - Cell coordinates are integers and carry no bounds of their own.

mod types;

pub use types::{CellCoord, Direction, Orientation, UnknownName};

pub fn crate_info() -> &'static str {
    "rollblock-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
