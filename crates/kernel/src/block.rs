use crate::event::RollEvent;
use rollblock_common::{CellCoord, Orientation};
use serde::{Deserialize, Serialize};

/// The block at rest: anchor cell plus orientation.
///
/// Only meaningful between rolls. While a roll animates this still holds the
/// pre-roll state; the scheduler replaces it in one step on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockState {
    pub cell: CellCoord,
    pub orientation: Orientation,
}

impl BlockState {
    pub fn new(cell: CellCoord, orientation: Orientation) -> Self {
        Self { cell, orientation }
    }

    /// Rebuild the resting state from an event log.
    ///
    /// Only commits move the block; starts, refusals and quits are skipped.
    pub fn replay(initial: BlockState, events: &[RollEvent]) -> BlockState {
        events.iter().fold(initial, |block, event| match event {
            RollEvent::Committed {
                cell, orientation, ..
            } => BlockState::new(*cell, *orientation),
            _ => block,
        })
    }
}
