use rollblock_common::{CellCoord, Direction, Orientation};
use rollblock_kernel::{GameState, RollEvent};
use serde::Serialize;

/// Game inspector for developer tooling.
///
/// Provides read-only queries against the game state for debugging and
/// headless runs.
pub struct GameInspector;

impl GameInspector {
    /// Produce a summary of the game state.
    pub fn summary(game: &GameState) -> GameSummary {
        let block = game.block();
        let (rolls, refusals) = game
            .events()
            .iter()
            .fold((0, 0), |(rolls, refusals), e| match e {
                RollEvent::Committed { .. } => (rolls + 1, refusals),
                RollEvent::Refused { .. } => (rolls, refusals + 1),
                _ => (rolls, refusals),
            });
        GameSummary {
            ticks: game.ticks(),
            cell: block.cell,
            orientation: block.orientation,
            on_arena: game.arena().fits(block.orientation, block.cell),
            rolling: game.roll().map(|r| (r.direction(), r.angle_degrees())),
            pending: game.latch().pending(),
            rolls_committed: rolls,
            rolls_refused: refusals,
            quit: game.has_quit(),
        }
    }
}

/// Summary of the game state for the inspector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub ticks: u64,
    pub cell: CellCoord,
    pub orientation: Orientation,
    /// Whether the resting footprint lies on the 15x10 grid.
    pub on_arena: bool,
    pub rolling: Option<(Direction, f32)>,
    pub pending: Vec<Direction>,
    pub rolls_committed: usize,
    pub rolls_refused: usize,
    pub quit: bool,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Block: tick={} cell={} orientation={} on_arena={} rolls={} refused={}",
            self.ticks,
            self.cell,
            self.orientation,
            self.on_arena,
            self.rolls_committed,
            self.rolls_refused
        )?;
        if let Some((direction, angle)) = self.rolling {
            write!(f, " rolling={direction}@{angle:.1}")?;
        }
        if !self.pending.is_empty() {
            let names: Vec<&str> = self.pending.iter().map(|d| d.name()).collect();
            write!(f, " pending={}", names.join(","))?;
        }
        if self.quit {
            write!(f, " quit")?;
        }
        Ok(())
    }
}
