//! Rendering Adapter: pose projection and a renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers cannot mutate game state; they only read it.
//! - One transform per drawable per tick, composed with the fixed camera.
//! - Graphics-API work (shaders, buffers, draw calls) belongs to the backend
//!   consuming [`Frame`], not to this crate.

mod camera;
pub mod mesh;
pub mod pose;
mod renderer;

pub use camera::FixedCamera;
pub use mesh::{Mesh, MeshKind};
pub use pose::{BlockPose, block_model, cell_origin, project, tile_model};
pub use renderer::{DebugTextRenderer, DrawCommand, Frame, FrameRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "rollblock-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
