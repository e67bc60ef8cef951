//! Animation parameters shared between the event handler and the animator.
//!
//! Each field lives behind its own critical-section mutex and every accessor
//! touches exactly one field, so no lock is ever held across the animator's
//! sleep and no multi-field transaction exists. A reader may see a direction
//! change one cycle before the matching position reset; that lag is cosmetic.

use core::cell::Cell;
use critical_section::Mutex;

use crate::types::{Direction, Speed};

/// Point-in-time copy of the animation parameters.
///
/// Fields are read one at a time, so the copy is not atomic across fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationSnapshot {
    pub direction: Direction,
    pub speed: Speed,
    pub position: u8,
}

/// Shared chase parameters.
///
/// Created once (usually in a `static`) with `Forward`, `Slow`, position 0 and
/// mutated in place for the lifetime of the program.
pub struct AnimationState {
    direction: Mutex<Cell<Direction>>,
    speed: Mutex<Cell<Speed>>,
    position: Mutex<Cell<u8>>,
}

impl AnimationState {
    /// Creates the startup state.
    pub const fn new() -> Self {
        Self {
            direction: Mutex::new(Cell::new(Direction::Forward)),
            speed: Mutex::new(Cell::new(Speed::Slow)),
            position: Mutex::new(Cell::new(0)),
        }
    }

    pub fn direction(&self) -> Direction {
        critical_section::with(|cs| self.direction.borrow(cs).get())
    }

    pub fn speed(&self) -> Speed {
        critical_section::with(|cs| self.speed.borrow(cs).get())
    }

    /// Current position, already reduced into `[0, LINE_COUNT)`.
    pub fn position(&self) -> u8 {
        critical_section::with(|cs| self.position.borrow(cs).get()) % crate::LINE_COUNT as u8
    }

    /// Reads all three fields, one critical section each.
    pub fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            direction: self.direction(),
            speed: self.speed(),
            position: self.position(),
        }
    }

    /// Switches between slow and fast. Returns the new speed.
    pub fn toggle_speed(&self) -> Speed {
        critical_section::with(|cs| {
            let speed = self.speed.borrow(cs);
            let toggled = speed.get().toggled();
            speed.set(toggled);
            toggled
        })
    }

    /// Flips the direction and moves the position to the boundary the chase
    /// should resume from. Returns the new direction and position.
    pub fn reverse(&self) -> (Direction, u8) {
        let direction = critical_section::with(|cs| {
            let direction = self.direction.borrow(cs);
            let flipped = direction.get().flipped();
            direction.set(flipped);
            flipped
        });

        let position = direction.start_position();
        critical_section::with(|cs| self.position.borrow(cs).set(position));

        (direction, position)
    }

    /// Returns the position to draw this cycle and stores the following one.
    ///
    /// The read and the write happen in one critical section so a reset from
    /// [`reverse`](Self::reverse) lands either before or after, never between.
    pub fn advance(&self) -> u8 {
        let direction = self.direction();
        critical_section::with(|cs| {
            let position = self.position.borrow(cs);
            let current = position.get() % crate::LINE_COUNT as u8;
            position.set(direction.next_position(current));
            current
        })
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
