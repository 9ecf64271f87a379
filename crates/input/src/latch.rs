use crate::event::InputEvent;
use rollblock_common::Direction;
use serde::{Deserialize, Serialize};

/// Sticky per-direction roll intents.
///
/// A key-down sets the intent for its direction and it stays set across ticks
/// until the scheduler clears it when the roll for that direction completes.
/// Pressing an already latched direction changes nothing. Quit is latched on
/// a separate flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLatch {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    quit: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key-down event.
    pub fn press(&mut self, event: InputEvent) {
        match event.direction() {
            Some(direction) => {
                let slot = self.slot_mut(direction);
                if *slot {
                    tracing::trace!(%direction, "intent already latched");
                }
                *slot = true;
            }
            None => {
                tracing::debug!("quit latched");
                self.quit = true;
            }
        }
    }

    /// Record every event delivered this tick, in arrival order.
    pub fn press_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.press(*event);
        }
    }

    pub fn is_pending(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// The pending intent that should be serviced next.
    ///
    /// Simultaneous intents resolve by fixed priority (Left, Right, Down, Up),
    /// never by arrival order.
    pub fn next_intent(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|d| self.is_pending(*d))
    }

    /// Clear one direction's intent. Called on roll completion.
    pub fn clear(&mut self, direction: Direction) {
        *self.slot_mut(direction) = false;
    }

    pub fn any_pending(&self) -> bool {
        self.next_intent().is_some()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Pending directions in service order.
    pub fn pending(&self) -> Vec<Direction> {
        Direction::PRIORITY
            .into_iter()
            .filter(|d| self.is_pending(*d))
            .collect()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}
