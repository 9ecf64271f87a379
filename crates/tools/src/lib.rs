//! Developer Tooling: read-only inspection of a running game.
//!
//! # Invariants
//! - Tools never mutate game state.

mod inspector;

pub use inspector::{GameInspector, GameSummary};

pub fn crate_info() -> &'static str {
    "rollblock-tools v0.1.0"
}
