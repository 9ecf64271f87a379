use rollblock_input::InputEvent;
use rollblock_kernel::{GameState, TickOutcome};
use rollblock_render::{FixedCamera, Frame, FrameRenderer, Renderer};
use std::time::Duration;

/// When the next scripted key press is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Pace {
    /// Wait until the block is idle with nothing latched.
    Settle,
    /// One key press per tick, regardless of state.
    Tick,
}

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Script exhausted and the block came to rest.
    Settled,
    Quit,
    TickLimit,
}

/// Drives a game from a key script at a fixed frame interval.
///
/// Each tick follows the engine order: deliver this tick's key presses, let
/// the game advance, then build the frame from the resulting state.
pub struct Driver {
    pub dt: Duration,
    pub pace: Pace,
    pub max_ticks: u64,
    camera: FixedCamera,
    renderer: FrameRenderer,
}

impl Driver {
    pub fn new(fps: u32, pace: Pace, max_ticks: u64) -> Self {
        Self {
            dt: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            pace,
            max_ticks,
            camera: FixedCamera::default(),
            renderer: FrameRenderer::new(),
        }
    }

    pub fn camera(&self) -> &FixedCamera {
        &self.camera
    }

    /// Run until the script is exhausted and the block settles, Quit arrives,
    /// or the tick limit is reached. `on_frame` sees every rendered frame.
    pub fn run(
        &self,
        game: &mut GameState,
        script: &[InputEvent],
        mut on_frame: impl FnMut(&GameState, &Frame),
    ) -> StopReason {
        let mut keys = script.iter().copied().peekable();
        while game.ticks() < self.max_ticks {
            let deliver = match self.pace {
                Pace::Settle => game.is_settled(),
                Pace::Tick => true,
            };
            let inputs: Vec<InputEvent> = if deliver {
                keys.next().into_iter().collect()
            } else {
                Vec::new()
            };
            if inputs.is_empty() && keys.peek().is_none() && game.is_settled() {
                return StopReason::Settled;
            }

            if game.tick(&inputs, self.dt) == TickOutcome::Quit {
                tracing::info!(tick = game.ticks(), "run stopped by quit");
                return StopReason::Quit;
            }
            let frame = self.renderer.render(game, &self.camera);
            on_frame(game, &frame);
        }
        tracing::warn!(max_ticks = self.max_ticks, "tick limit reached");
        StopReason::TickLimit
    }
}
