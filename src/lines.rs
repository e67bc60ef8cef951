//! Output line abstraction and the visiting order of the chase.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::LINE_COUNT;
use crate::types::LineId;

/// Physical line driven at each logical chase step.
///
/// Lines 2 and 3 are swapped on purpose: on the reference board the LEDs sit
/// in a square, so this order walks around it instead of zig-zagging.
pub const VISITING_ORDER: [LineId; LINE_COUNT] = [LineId(0), LineId(1), LineId(3), LineId(2)];

/// Maps a logical chase position onto the physical line to toggle.
#[inline]
pub fn line_for_position(position: u8) -> LineId {
    VISITING_ORDER[position as usize % LINE_COUNT]
}

/// Trait for abstracting a bank of on/off output lines.
///
/// Implement this for your GPIO outputs. Configuration and readiness checks
/// belong to the implementation and happen before it is handed to the core;
/// these methods cannot fail.
pub trait OutputLines {
    /// Drives `line` active (`true`) or inactive (`false`).
    fn set(&mut self, line: LineId, active: bool);

    /// Inverts the drive state of `line`.
    fn toggle(&mut self, line: LineId);

    /// Drives every line inactive.
    fn clear_all(&mut self) {
        for id in 0..LINE_COUNT as u8 {
            self.set(LineId(id), false);
        }
    }
}

/// Output lines reachable from both the event handler and the animator.
///
/// Every call enters its own short critical section; nothing is held across
/// a suspension point.
pub struct SharedLines<O: OutputLines> {
    inner: Mutex<RefCell<O>>,
}

impl<O: OutputLines> SharedLines<O> {
    /// Wraps an already configured output bank.
    pub const fn new(lines: O) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(lines)),
        }
    }

    /// Inverts one line.
    pub fn toggle(&self, line: LineId) {
        self.with(|lines| lines.toggle(line));
    }

    /// Drives one line.
    pub fn set(&self, line: LineId, active: bool) {
        self.with(|lines| lines.set(line, active));
    }

    /// Drives every line inactive.
    pub fn clear_all(&self) {
        self.with(|lines| lines.clear_all());
    }

    /// Runs `f` with exclusive access to the wrapped lines.
    pub fn with<R>(&self, f: impl FnOnce(&mut O) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow_ref_mut(cs)))
    }

    /// Returns the wrapped lines.
    pub fn into_inner(self) -> O {
        self.inner.into_inner().into_inner()
    }
}
