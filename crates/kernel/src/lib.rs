//! Roll Kernel: authoritative block state, the transition table and the roll scheduler.
//!
//! # Invariants
//! - The transition table is total; every `(orientation, direction)` pair has a roll.
//! - At most one roll animates at a time and it cannot be cancelled or redirected.
//! - Block state changes only when a roll commits, and all of it changes at once.
//! - Roll speed depends on elapsed time, not on how often `tick` is called.

pub mod block;
pub mod config;
pub mod event;
pub mod game;
pub mod grid;
pub mod scheduler;
pub mod transition;

pub use block::BlockState;
pub use config::{BoundsPolicy, ConfigError, DEFAULT_DEGREES_PER_SECOND, RollConfig};
pub use event::RollEvent;
pub use game::{GameState, TickOutcome};
pub use grid::{Arena, GRID_DEPTH, GRID_WIDTH};
pub use scheduler::{Phase, ROLL_DEGREES, RollInProgress, RollScheduler};
pub use transition::{Transition, table, transition};

pub fn crate_info() -> &'static str {
    "rollblock-kernel v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("kernel"));
    }
}
