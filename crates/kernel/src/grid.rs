use rollblock_common::{CellCoord, Orientation};

/// Number of cell columns (X).
pub const GRID_WIDTH: i32 = 15;
/// Number of cell rows (Z).
pub const GRID_DEPTH: i32 = 10;

/// Placeholder marker stored in every cell of a fresh arena.
pub const FLOOR_MARKER: u8 = 1;

/// The fixed play grid.
///
/// Every cell carries a marker that is set once at construction. Roll logic
/// never reads the markers; the arena only answers containment queries for
/// the optional bounds policy and enumerates tiles for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: i32,
    depth: i32,
    cells: Vec<u8>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// A 15x10 arena with every cell marked as floor.
    pub fn new() -> Self {
        Self {
            width: GRID_WIDTH,
            depth: GRID_DEPTH,
            cells: vec![FLOOR_MARKER; (GRID_WIDTH * GRID_DEPTH) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.depth).contains(&cell.z)
    }

    /// True when every cell of the block's footprint lies on the arena.
    pub fn fits(&self, orientation: Orientation, anchor: CellCoord) -> bool {
        orientation
            .cells(anchor)
            .into_iter()
            .all(|c| self.contains(c))
    }

    pub fn marker(&self, cell: CellCoord) -> Option<u8> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.cells[(cell.x * self.depth + cell.z) as usize])
    }

    /// All cells, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.width).flat_map(move |x| (0..self.depth).map(move |z| CellCoord::new(x, z)))
    }
}
