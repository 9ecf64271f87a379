use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four roll directions.
///
/// `Left`/`Right` move along the grid X axis, `Up`/`Down` along the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the order pending intents are serviced.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// True for the X-axis directions.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl FromStr for Direction {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            _ => Err(UnknownName {
                kind: "direction",
                name: s.to_string(),
            }),
        }
    }
}

/// The three poses a block can rest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Upright on a single cell, two units tall.
    #[default]
    Standing,
    /// Lying on two cells along the X axis.
    LyingAlongX,
    /// Lying on two cells along the Z axis.
    LyingAlongZ,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Standing,
        Orientation::LyingAlongX,
        Orientation::LyingAlongZ,
    ];

    /// Footprint in cells as `(along_x, along_z)`.
    pub fn footprint(self) -> (i32, i32) {
        match self {
            Self::Standing => (1, 1),
            Self::LyingAlongX => (2, 1),
            Self::LyingAlongZ => (1, 2),
        }
    }

    pub fn height(self) -> i32 {
        match self {
            Self::Standing => 2,
            Self::LyingAlongX | Self::LyingAlongZ => 1,
        }
    }

    /// Size of the block's bounding box in world units, anchored at its
    /// minimum corner.
    pub fn extents(self) -> Vec3 {
        let (x, z) = self.footprint();
        Vec3::new(x as f32, self.height() as f32, z as f32)
    }

    /// Grid cells covered when resting with its anchor at `anchor`.
    ///
    /// World Z grows as cell Z shrinks, so a block lying along Z extends
    /// toward the lower cell row.
    pub fn cells(self, anchor: CellCoord) -> Vec<CellCoord> {
        match self {
            Self::Standing => vec![anchor],
            Self::LyingAlongX => vec![anchor, anchor.offset(1, 0)],
            Self::LyingAlongZ => vec![anchor, anchor.offset(0, -1)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Standing => "standing",
            Self::LyingAlongX => "lying-x",
            Self::LyingAlongZ => "lying-z",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standing" => Ok(Self::Standing),
            "lying-x" | "lyingalongx" => Ok(Self::LyingAlongX),
            "lying-z" | "lyingalongz" => Ok(Self::LyingAlongZ),
            _ => Err(UnknownName {
                kind: "orientation",
                name: s.to_string(),
            }),
        }
    }
}

/// An integer cell coordinate on the play grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub z: i32,
}

impl CellCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
