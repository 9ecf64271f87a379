use glam::{Mat4, Vec3};
use rollblock_common::CellCoord;
use rollblock_kernel::{BlockState, GameState, RollInProgress};

use crate::mesh::{MeshKind, TILE_THICKNESS};

/// World X of cell column 0.
pub const GRID_ORIGIN_X: f32 = -7.5;
/// World Z of cell row 0. Rows grow toward negative world Z.
pub const GRID_ORIGIN_Z: f32 = 5.0;
/// Height of the block's underside: it rests on top of the tile slabs.
pub const BLOCK_LIFT: f32 = TILE_THICKNESS;

/// World position of a cell's minimum corner on the floor plane.
pub fn cell_origin(cell: CellCoord) -> Vec3 {
    Vec3::new(
        GRID_ORIGIN_X + cell.x as f32,
        0.0,
        GRID_ORIGIN_Z - cell.z as f32,
    )
}

/// Model matrix of a floor tile.
pub fn tile_model(cell: CellCoord) -> Mat4 {
    Mat4::from_translation(cell_origin(cell))
}

/// Model matrix of the block for the current tick.
///
/// At rest this is a plain translation to the anchor cell. Mid-roll the
/// rotation is applied about the pivot edge:
/// `translate(cell) * translate(-pivot) * rotate(angle, axis) * translate(pivot)`.
pub fn block_model(block: &BlockState, roll: Option<&RollInProgress>) -> Mat4 {
    let anchor = Mat4::from_translation(cell_origin(block.cell) + Vec3::Y * BLOCK_LIFT);
    let Some(roll) = roll else {
        return anchor;
    };
    let pivot = roll.pivot_offset();
    let rotate = Mat4::from_axis_angle(roll.axis(), roll.angle_degrees().to_radians());
    anchor * Mat4::from_translation(-pivot) * rotate * Mat4::from_translation(pivot)
}

/// Everything the renderer needs to draw the block this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPose {
    pub mesh: MeshKind,
    pub model: Mat4,
}

/// Project the game's block into world space. Reads only; never mutates.
pub fn project(game: &GameState) -> BlockPose {
    let block = game.block();
    BlockPose {
        mesh: MeshKind::for_orientation(block.orientation),
        model: block_model(block, game.roll()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollblock_common::Orientation;
    use rollblock_input::InputEvent;
    use rollblock_kernel::RollConfig;
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    /// Axis-aligned bounds of a block mesh of `extents` under `model`.
    fn bounds(model: Mat4, extents: Vec3) -> (Vec3, Vec3) {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { 0.0 } else { extents.x },
                if i & 2 == 0 { 0.0 } else { extents.y },
                if i & 4 == 0 { 0.0 } else { extents.z },
            );
            let p = model.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    /// Pose of the roll at 90 degrees, just before it commits.
    fn final_pose(from: Orientation, event: InputEvent) -> (Mat4, GameState) {
        let mut game = GameState::new(RollConfig {
            initial_orientation: from,
            ..RollConfig::default()
        })
        .unwrap();
        // 89 degrees, then rebuild the last pose by hand at exactly 90.
        game.tick(&[event], Duration::from_secs_f64(89.0 / 120.0));
        let roll = *game.roll().unwrap();
        let block = *game.block();
        let pivot = roll.pivot_offset();
        let anchor =
            Mat4::from_translation(cell_origin(block.cell) + Vec3::Y * BLOCK_LIFT);
        let model = anchor
            * Mat4::from_translation(-pivot)
            * Mat4::from_axis_angle(roll.axis(), 90f32.to_radians())
            * Mat4::from_translation(pivot);
        game.tick(&[], Duration::from_secs(1));
        (model, game)
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a - b).abs().max_element() < EPS, "{a} != {b}");
    }

    #[test]
    fn rest_pose_is_translation_to_cell() {
        let block = BlockState::new(CellCoord::new(5, 5), Orientation::Standing);
        let model = block_model(&block, None);
        assert_vec_eq(
            model.transform_point3(Vec3::ZERO),
            Vec3::new(-2.5, 0.2, 0.0),
        );
    }

    #[test]
    fn tiles_span_the_grid() {
        assert_vec_eq(
            tile_model(CellCoord::new(0, 0)).transform_point3(Vec3::ZERO),
            Vec3::new(-7.5, 0.0, 5.0),
        );
        assert_vec_eq(
            tile_model(CellCoord::new(14, 9)).transform_point3(Vec3::ZERO),
            Vec3::new(6.5, 0.0, -4.0),
        );
    }

    #[test]
    fn mid_roll_rotates_about_pivot() {
        let mut game = GameState::new(RollConfig::default()).unwrap();
        game.tick(&[InputEvent::Left], Duration::from_millis(375)); // 45 degrees
        let pose = project(&game);
        assert_eq!(pose.mesh, MeshKind::Standing);
        // Rolling left pivots on the block's -X bottom edge, which stays put.
        assert_vec_eq(
            pose.model.transform_point3(Vec3::new(0.0, 0.0, 0.5)),
            Vec3::new(-2.5, 0.2, 0.5),
        );
        let top = pose.model.transform_point3(Vec3::new(0.0, 2.0, 0.0));
        assert!(top.x < -2.5);
        assert!(top.y < 2.2);
    }

    #[test]
    fn every_roll_ends_where_the_block_rests() {
        for (direction, from, t) in rollblock_kernel::table() {
            let (model, game) = final_pose(from, InputEvent::from(direction));
            let rest = project(&game);
            assert_eq!(game.block().orientation, t.to, "{direction} from {from}");
            assert_eq!(rest.mesh, MeshKind::for_orientation(t.to));
            let (a_min, a_max) = bounds(model, from.extents());
            let (b_min, b_max) = bounds(rest.model, t.to.extents());
            assert_vec_eq(a_min, b_min);
            assert_vec_eq(a_max, b_max);
        }
    }
}
