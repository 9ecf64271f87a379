use glam::Vec3;
use rollblock_common::Orientation;
use serde::{Deserialize, Serialize};

/// Which precomputed mesh a draw command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshKind {
    Tile,
    Standing,
    LyingAlongX,
    LyingAlongZ,
}

impl MeshKind {
    /// The block mesh matching a resting orientation.
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Standing => Self::Standing,
            Orientation::LyingAlongX => Self::LyingAlongX,
            Orientation::LyingAlongZ => Self::LyingAlongZ,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Standing => "block-standing",
            Self::LyingAlongX => "block-lying-x",
            Self::LyingAlongZ => "block-lying-z",
        }
    }

    /// Triangle-list geometry for this mesh.
    pub fn build(self) -> Mesh {
        match self {
            Self::Tile => tile_mesh(),
            Self::Standing => block_mesh(Orientation::Standing),
            Self::LyingAlongX => block_mesh(Orientation::LyingAlongX),
            Self::LyingAlongZ => block_mesh(Orientation::LyingAlongZ),
        }
    }
}

/// Non-indexed triangle list with one colour per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

const BLOCK_DARK: [f32; 3] = [0.1, 0.1, 0.1];
const BLOCK_LIGHT: [f32; 3] = [0.3, 0.2, 0.1];
const TILE_DARK: [f32; 3] = [0.3, 0.3, 0.3];
/// Height of a floor tile slab.
pub const TILE_THICKNESS: f32 = 0.2;
const TILE_LIGHT: [f32; 3] = [0.6, 0.6, 0.6];

/// Two triangles for the quad `a b c d` (in winding order) with a two-tone
/// shade: the first corner of each triangle dark, the rest light.
fn push_quad(mesh: &mut Mesh, quad: [Vec3; 4], dark: [f32; 3], light: [f32; 3]) {
    let [a, b, c, d] = quad;
    for tri in [[a, b, c], [a, c, d]] {
        for (i, p) in tri.into_iter().enumerate() {
            mesh.positions.push(p.to_array());
            mesh.colors.push(if i == 0 { dark } else { light });
        }
    }
}

/// Box from the origin to `size`: six faces, 36 vertices.
pub fn box_mesh(size: Vec3, dark: [f32; 3], light: [f32; 3]) -> Mesh {
    let (x, y, z) = (size.x, size.y, size.z);
    let v = |px: f32, py: f32, pz: f32| Vec3::new(px, py, pz);
    #[rustfmt::skip]
    let faces = [
        [v(0.0, 0.0, 0.0), v(x, 0.0, 0.0), v(x, y, 0.0), v(0.0, y, 0.0)], // -Z
        [v(0.0, 0.0, z),   v(x, 0.0, z),   v(x, y, z),   v(0.0, y, z)],   // +Z
        [v(0.0, 0.0, 0.0), v(0.0, y, 0.0), v(0.0, y, z), v(0.0, 0.0, z)], // -X
        [v(x, 0.0, 0.0),   v(x, y, 0.0),   v(x, y, z),   v(x, 0.0, z)],   // +X
        [v(0.0, 0.0, 0.0), v(x, 0.0, 0.0), v(x, 0.0, z), v(0.0, 0.0, z)], // -Y
        [v(0.0, y, 0.0),   v(x, y, 0.0),   v(x, y, z),   v(0.0, y, z)],   // +Y
    ];
    let mut mesh = Mesh {
        positions: Vec::with_capacity(36),
        colors: Vec::with_capacity(36),
    };
    for face in faces {
        push_quad(&mut mesh, face, dark, light);
    }
    mesh
}

/// The block in a given resting orientation.
pub fn block_mesh(orientation: Orientation) -> Mesh {
    box_mesh(orientation.extents(), BLOCK_DARK, BLOCK_LIGHT)
}

/// Floor tile: a unit slab as thick as the gap under the resting block.
pub fn tile_mesh() -> Mesh {
    box_mesh(Vec3::new(1.0, TILE_THICKNESS, 1.0), TILE_DARK, TILE_LIGHT)
}
