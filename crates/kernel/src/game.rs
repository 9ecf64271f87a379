use crate::block::BlockState;
use crate::config::{ConfigError, RollConfig};
use crate::event::RollEvent;
use crate::grid::Arena;
use crate::scheduler::{Bounds, Phase, RollInProgress, RollScheduler};
use rollblock_input::{InputEvent, InputLatch};
use std::time::Duration;

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Quit was requested; the caller should stop ticking.
    Quit,
}

/// The whole mutable state of a run, owned in one place.
///
/// Passed explicitly into [`GameState::tick`]. The block, the in-progress
/// roll and the latch are only ever written from inside a tick; renderers
/// and tools read through the accessors.
#[derive(Debug, Clone)]
pub struct GameState {
    config: RollConfig,
    arena: Arena,
    block: BlockState,
    scheduler: RollScheduler,
    latch: InputLatch,
    ticks: u64,
    quit: bool,
    /// Append-only log of every roll start, commit, refusal and quit.
    events: Vec<RollEvent>,
}

impl GameState {
    /// Create a run from a validated configuration.
    pub fn new(config: RollConfig) -> Result<Self, ConfigError> {
        let arena = Arena::new();
        config.validate(&arena)?;
        let block = BlockState::new(config.initial_cell, config.initial_orientation);
        tracing::debug!(cell = %block.cell, orientation = %block.orientation, "game created");
        Ok(Self {
            config,
            arena,
            block,
            scheduler: RollScheduler::new(),
            latch: InputLatch::new(),
            ticks: 0,
            quit: false,
            events: Vec::new(),
        })
    }

    /// Advance one frame.
    ///
    /// Within a tick the order is fixed: latch this tick's key-downs, then
    /// advance the scheduler by `degrees_per_second * dt`. Quit short-circuits
    /// before the scheduler runs, even mid-roll.
    pub fn tick(&mut self, inputs: &[InputEvent], dt: Duration) -> TickOutcome {
        if self.quit {
            return TickOutcome::Quit;
        }
        self.ticks += 1;
        let _span = tracing::info_span!("tick", n = self.ticks).entered();

        self.latch.press_all(inputs);
        if self.latch.quit_requested() {
            let mid_roll = !self.scheduler.is_idle();
            tracing::info!(mid_roll, "quit requested");
            self.events.push(RollEvent::Quit {
                tick: self.ticks,
                mid_roll,
            });
            self.quit = true;
            return TickOutcome::Quit;
        }

        let step_degrees = self.config.degrees_per_second * dt.as_secs_f32();
        let bounds = Bounds {
            arena: &self.arena,
            policy: self.config.bounds,
        };
        self.scheduler.step(
            self.ticks,
            step_degrees,
            &mut self.block,
            &mut self.latch,
            bounds,
            &mut self.events,
        );
        TickOutcome::Continue
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Resting state. Mid-roll this is still the state the roll started from.
    pub fn block(&self) -> &BlockState {
        &self.block
    }

    pub fn roll(&self) -> Option<&RollInProgress> {
        self.scheduler.roll()
    }

    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    /// Number of ticks processed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Idle with no pending intents: nothing will move without new input.
    pub fn is_settled(&self) -> bool {
        self.scheduler.is_idle() && !self.latch.any_pending()
    }

    pub fn events(&self) -> &[RollEvent] {
        &self.events
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<RollEvent> {
        std::mem::take(&mut self.events)
    }

    /// The resting state this run started from.
    pub fn initial_block(&self) -> BlockState {
        BlockState::new(self.config.initial_cell, self.config.initial_orientation)
    }

    /// Deterministic hash of the observable state for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.ticks.to_le_bytes());
        mix(&mut h, &self.block.cell.x.to_le_bytes());
        mix(&mut h, &self.block.cell.z.to_le_bytes());
        mix(&mut h, &[self.block.orientation as u8]);
        match self.scheduler.roll() {
            Some(roll) => {
                mix(&mut h, &[1, roll.direction() as u8]);
                mix(&mut h, &roll.angle_degrees().to_bits().to_le_bytes());
            }
            None => mix(&mut h, &[0]),
        }
        for d in self.latch.pending() {
            mix(&mut h, &[d as u8]);
        }
        h
    }
}
