use glam::Mat4;
use rollblock_kernel::GameState;

use crate::camera::FixedCamera;
use crate::mesh::MeshKind;
use crate::pose;

/// One object to draw: which mesh, and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub mesh: MeshKind,
    /// Object-to-world transform.
    pub model: Mat4,
    /// `projection * view * model`, ready for the vertex shader.
    pub mvp: Mat4,
}

/// Everything handed to a graphics backend for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: u64,
    /// Floor tiles first, then the block.
    pub draws: Vec<DrawCommand>,
}

impl Frame {
    /// The block's draw command (always the last one).
    pub fn block(&self) -> Option<&DrawCommand> {
        self.draws.last().filter(|d| d.mesh != MeshKind::Tile)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.draws.iter().filter(|d| d.mesh == MeshKind::Tile)
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads game state and the camera, then produces output. It
/// never mutates the game; block state is owned by the kernel.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one tick from the given game state and camera.
    fn render(&self, game: &GameState, camera: &FixedCamera) -> Self::Output;
}

/// Builds the per-tick draw list a graphics backend consumes.
///
/// The backend binds shaders, uploads `mvp` and issues one draw per command
/// with the named mesh; nothing here touches graphics-API state.
#[derive(Debug, Default)]
pub struct FrameRenderer;

impl FrameRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for FrameRenderer {
    type Output = Frame;

    fn render(&self, game: &GameState, camera: &FixedCamera) -> Frame {
        let vp = camera.view_projection();
        let arena = game.arena();
        let mut draws = Vec::with_capacity(arena.tile_count() + 1);

        for cell in arena.tiles() {
            let model = pose::tile_model(cell);
            draws.push(DrawCommand {
                mesh: MeshKind::Tile,
                model,
                mvp: vp * model,
            });
        }

        let block = pose::project(game);
        draws.push(DrawCommand {
            mesh: block.mesh,
            model: block.model,
            mvp: vp * block.model,
        });
        tracing::trace!(
            tick = game.ticks(),
            draws = draws.len(),
            mesh = block.mesh.name(),
            "frame built"
        );

        Frame {
            tick: game.ticks(),
            draws,
        }
    }
}

/// Debug text renderer for headless runs.
///
/// Produces a human-readable summary of the block and the frame it would
/// draw. Useful for CLI output, logging and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, game: &GameState, camera: &FixedCamera) -> String {
        let frame = FrameRenderer.render(game, camera);
        let block = game.block();
        let mut out = String::new();

        out.push_str(&format!("=== Tick {} ===\n", frame.tick));
        out.push_str(&format!(
            "Block: cell={} orientation={}\n",
            block.cell, block.orientation
        ));
        match game.roll() {
            Some(roll) => out.push_str(&format!(
                "Roll: {} angle={:.1} axis=({:.0}, {:.0}, {:.0})\n",
                roll.direction(),
                roll.angle_degrees(),
                roll.axis().x,
                roll.axis().y,
                roll.axis().z
            )),
            None => out.push_str("Roll: idle\n"),
        }
        out.push_str(&format!("Draws: {}\n", frame.draws.len()));
        if let Some(draw) = frame.block() {
            let p = draw.model.w_axis;
            out.push_str(&format!(
                "  [{}] origin=({:.2}, {:.2}, {:.2})\n",
                draw.mesh.name(),
                p.x,
                p.y,
                p.z
            ));
        }
        out
    }
}
