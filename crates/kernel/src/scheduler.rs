use crate::block::BlockState;
use crate::config::BoundsPolicy;
use crate::event::RollEvent;
use crate::grid::Arena;
use crate::transition::{Transition, transition};
use glam::Vec3;
use rollblock_common::Direction;
use rollblock_input::InputLatch;
use serde::{Deserialize, Serialize};

/// Total rotation of every roll.
pub const ROLL_DEGREES: f32 = 90.0;

/// A roll that is currently animating.
///
/// Created when an intent is accepted and dropped the moment the angle reaches
/// [`ROLL_DEGREES`]. The transition is looked up once, at acceptance, and never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollInProgress {
    direction: Direction,
    angle_degrees: f32,
    transition: Transition,
}

impl RollInProgress {
    fn new(direction: Direction, transition: Transition) -> Self {
        Self {
            direction,
            angle_degrees: 0.0,
            transition,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Accumulated rotation, in `0.0..=90.0`.
    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    pub fn axis(&self) -> Vec3 {
        self.transition.axis
    }

    pub fn pivot_offset(&self) -> Vec3 {
        self.transition.pivot
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

}

/// Whether a roll is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rolling(Direction),
}

/// Bounds check applied when a roll is accepted.
#[derive(Debug, Clone, Copy)]
pub struct Bounds<'a> {
    pub arena: &'a Arena,
    pub policy: BoundsPolicy,
}

/// Two-state roll machine: Idle or Rolling.
///
/// Sole writer of [`BlockState`]. While Idle it services at most one pending
/// intent per step; while Rolling it ignores the latch entirely.
#[derive(Debug, Clone, Default)]
pub struct RollScheduler {
    roll: Option<RollInProgress>,
}

impl RollScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match &self.roll {
            Some(roll) => Phase::Rolling(roll.direction),
            None => Phase::Idle,
        }
    }

    pub fn roll(&self) -> Option<&RollInProgress> {
        self.roll.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.roll.is_none()
    }

    /// Advance the machine by one tick worth of rotation.
    ///
    /// A roll accepted in this step also advances in this step. A commit ends
    /// the step; a new roll can begin no earlier than the next one.
    pub fn step(
        &mut self,
        tick: u64,
        step_degrees: f32,
        block: &mut BlockState,
        latch: &mut InputLatch,
        bounds: Bounds<'_>,
        events: &mut Vec<RollEvent>,
    ) {
        if self.roll.is_none() && !self.try_start(tick, block, latch, bounds, events) {
            return;
        }
        self.advance(tick, step_degrees, block, latch, events);
    }

    fn try_start(
        &mut self,
        tick: u64,
        block: &BlockState,
        latch: &mut InputLatch,
        bounds: Bounds<'_>,
        events: &mut Vec<RollEvent>,
    ) -> bool {
        let Some(direction) = latch.next_intent() else {
            return false;
        };

        let t = transition(block.orientation, direction);
        let target_cell = t.target_cell(block.cell);
        if !bounds.policy.admits(bounds.arena, t.to, target_cell) {
            tracing::warn!(
                %direction,
                from = %block.cell,
                target = %target_cell,
                "roll refused: footprint leaves the arena"
            );
            // Dropping the intent keeps lower-priority intents from starving.
            latch.clear(direction);
            events.push(RollEvent::Refused {
                tick,
                direction,
                target_cell,
                target_orientation: t.to,
            });
            return false;
        }

        tracing::debug!(
            %direction,
            orientation = %block.orientation,
            cell = %block.cell,
            "roll started"
        );
        events.push(RollEvent::Started {
            tick,
            direction,
            from: *block,
        });
        self.roll = Some(RollInProgress::new(direction, t));
        true
    }

    fn advance(
        &mut self,
        tick: u64,
        step_degrees: f32,
        block: &mut BlockState,
        latch: &mut InputLatch,
        events: &mut Vec<RollEvent>,
    ) {
        let Some(roll) = self.roll.as_mut() else {
            return;
        };
        roll.angle_degrees = (roll.angle_degrees + step_degrees.max(0.0)).min(ROLL_DEGREES);
        tracing::trace!(angle = roll.angle_degrees, direction = %roll.direction, "rolling");

        if roll.angle_degrees < ROLL_DEGREES {
            return;
        }

        let direction = roll.direction;
        let t = roll.transition;
        self.roll = None;

        block.cell = t.target_cell(block.cell);
        block.orientation = t.to;
        latch.clear(direction);

        tracing::debug!(
            %direction,
            orientation = %block.orientation,
            cell = %block.cell,
            "roll committed"
        );
        events.push(RollEvent::Committed {
            tick,
            direction,
            cell: block.cell,
            orientation: block.orientation,
        });
    }
}
