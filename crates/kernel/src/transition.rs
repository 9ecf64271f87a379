use glam::Vec3;
use rollblock_common::{CellCoord, Direction, Orientation};
use serde::{Deserialize, Serialize};

/// Geometry and outcome of one roll, frozen when the roll is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Unit rotation axis.
    pub axis: Vec3,
    /// Translation that puts the rotation axis on the block's contact edge.
    pub pivot: Vec3,
    /// Orientation once the roll completes.
    pub to: Orientation,
    /// Cell displacement applied on completion, as `(dx, dz)`.
    pub delta: (i32, i32),
}

impl Transition {
    const fn new(axis: Vec3, pivot: Vec3, to: Orientation, delta: (i32, i32)) -> Self {
        Self {
            axis,
            pivot,
            to,
            delta,
        }
    }

    /// The anchor cell after applying this roll's displacement.
    pub fn target_cell(&self, from: CellCoord) -> CellCoord {
        from.offset(self.delta.0, self.delta.1)
    }
}

/// Look up the roll for `direction` starting from `from`.
///
/// Total over both enums. Opposite directions pivot on different edges but
/// undo each other, and every row lands the rotated box exactly on the
/// resting pose it commits to.
pub fn transition(from: Orientation, direction: Direction) -> Transition {
    use Orientation::{LyingAlongX, LyingAlongZ, Standing};

    match direction {
        Direction::Left => {
            let (to, delta) = match from {
                Standing => (LyingAlongX, (-2, 0)),
                LyingAlongX => (Standing, (-1, 0)),
                LyingAlongZ => (LyingAlongZ, (-1, 0)),
            };
            Transition::new(Vec3::Z, Vec3::ZERO, to, delta)
        }
        Direction::Right => {
            let (pivot_x, to, delta) = match from {
                Standing => (-1.0, LyingAlongX, (1, 0)),
                LyingAlongX => (-2.0, Standing, (2, 0)),
                LyingAlongZ => (-1.0, LyingAlongZ, (1, 0)),
            };
            Transition::new(Vec3::NEG_Z, Vec3::new(pivot_x, 0.0, 0.0), to, delta)
        }
        Direction::Up => {
            let (to, delta) = match from {
                Standing => (LyingAlongZ, (0, 2)),
                LyingAlongX => (LyingAlongX, (0, 1)),
                LyingAlongZ => (Standing, (0, 1)),
            };
            Transition::new(Vec3::NEG_X, Vec3::ZERO, to, delta)
        }
        Direction::Down => {
            let (pivot_z, to, delta) = match from {
                Standing => (-1.0, LyingAlongZ, (0, -1)),
                LyingAlongX => (-1.0, LyingAlongX, (0, -1)),
                LyingAlongZ => (-2.0, Standing, (0, -2)),
            };
            Transition::new(Vec3::X, Vec3::new(0.0, 0.0, pivot_z), to, delta)
        }
    }
}

/// Every `(direction, from, transition)` row, in service-priority order.
pub fn table() -> Vec<(Direction, Orientation, Transition)> {
    Direction::PRIORITY
        .into_iter()
        .flat_map(|d| {
            Orientation::ALL
                .into_iter()
                .map(move |o| (d, o, transition(o, d)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Down, Left, Right, Up};
    use Orientation::{LyingAlongX, LyingAlongZ, Standing};

    fn row(
        d: Direction,
        from: Orientation,
        axis: Vec3,
        pivot: [f32; 3],
        to: Orientation,
        delta: (i32, i32),
    ) {
        let t = transition(from, d);
        assert_eq!(t.axis, axis, "axis for {d} from {from}");
        assert_eq!(t.pivot, Vec3::from_array(pivot), "pivot for {d} from {from}");
        assert_eq!(t.to, to, "target for {d} from {from}");
        assert_eq!(t.delta, delta, "delta for {d} from {from}");
    }

    #[test]
    fn left_rows() {
        row(Left, Standing, Vec3::Z, [0.0, 0.0, 0.0], LyingAlongX, (-2, 0));
        row(Left, LyingAlongX, Vec3::Z, [0.0, 0.0, 0.0], Standing, (-1, 0));
        row(Left, LyingAlongZ, Vec3::Z, [0.0, 0.0, 0.0], LyingAlongZ, (-1, 0));
    }

    #[test]
    fn right_rows() {
        row(Right, Standing, Vec3::NEG_Z, [-1.0, 0.0, 0.0], LyingAlongX, (1, 0));
        row(Right, LyingAlongX, Vec3::NEG_Z, [-2.0, 0.0, 0.0], Standing, (2, 0));
        row(Right, LyingAlongZ, Vec3::NEG_Z, [-1.0, 0.0, 0.0], LyingAlongZ, (1, 0));
    }

    #[test]
    fn up_rows() {
        row(Up, Standing, Vec3::NEG_X, [0.0, 0.0, 0.0], LyingAlongZ, (0, 2));
        row(Up, LyingAlongX, Vec3::NEG_X, [0.0, 0.0, 0.0], LyingAlongX, (0, 1));
        row(Up, LyingAlongZ, Vec3::NEG_X, [0.0, 0.0, 0.0], Standing, (0, 1));
    }

    #[test]
    fn down_rows() {
        row(Down, Standing, Vec3::X, [0.0, 0.0, -1.0], LyingAlongZ, (0, -1));
        row(Down, LyingAlongX, Vec3::X, [0.0, 0.0, -1.0], LyingAlongX, (0, -1));
        row(Down, LyingAlongZ, Vec3::X, [0.0, 0.0, -2.0], Standing, (0, -2));
    }

    #[test]
    fn axes_are_unit_and_orthogonal_to_motion() {
        for (d, _, t) in table() {
            assert!((t.axis.length() - 1.0).abs() < 1e-6);
            let motion = if d.is_horizontal() { Vec3::X } else { Vec3::Z };
            assert_eq!(t.axis.dot(motion), 0.0);
            assert_eq!(t.axis.y, 0.0);
        }
    }

    #[test]
    fn displacement_stays_on_the_roll_axis() {
        for (d, _, t) in table() {
            if d.is_horizontal() {
                assert_eq!(t.delta.1, 0);
            } else {
                assert_eq!(t.delta.0, 0);
            }
        }
    }

    #[test]
    fn opposite_rolls_undo_each_other() {
        for (d, from, t) in table() {
            let back = match d {
                Left => Right,
                Right => Left,
                Up => Down,
                Down => Up,
            };
            let undo = transition(t.to, back);
            assert_eq!(undo.to, from, "{d} then {back} from {from}");
            assert_eq!(t.delta.0 + undo.delta.0, 0, "{d} then {back} from {from}");
            assert_eq!(t.delta.1 + undo.delta.1, 0, "{d} then {back} from {from}");
        }
    }

    #[test]
    fn table_is_complete() {
        let rows = table();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].0, Left);
        assert_eq!(rows[11].0, Up);
    }

    #[test]
    fn target_cell_applies_delta() {
        let t = transition(Standing, Left);
        assert_eq!(t.target_cell(CellCoord::new(5, 5)), CellCoord::new(3, 5));
    }
}
