use crate::block::BlockState;
use rollblock_common::{CellCoord, Direction, Orientation};
use serde::{Deserialize, Serialize};

/// A record of every state change the engine makes.
///
/// The log is append-only during a run and is enough to rebuild the resting
/// block state (see [`BlockState::replay`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RollEvent {
    /// A roll was accepted from the given resting state.
    Started {
        tick: u64,
        direction: Direction,
        from: BlockState,
    },
    /// A roll reached 90 degrees and the block came to rest.
    Committed {
        tick: u64,
        direction: Direction,
        cell: CellCoord,
        orientation: Orientation,
    },
    /// A roll was refused by the bounds policy; nothing moved.
    Refused {
        tick: u64,
        direction: Direction,
        target_cell: CellCoord,
        target_orientation: Orientation,
    },
    /// Quit was requested.
    Quit { tick: u64, mid_roll: bool },
}

impl RollEvent {
    pub fn tick(&self) -> u64 {
        match self {
            Self::Started { tick, .. }
            | Self::Committed { tick, .. }
            | Self::Refused { tick, .. }
            | Self::Quit { tick, .. } => *tick,
        }
    }
}
