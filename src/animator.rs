//! The chase animation loop body.
//!
//! [`ChaseAnimator`] performs one cycle per [`step`](ChaseAnimator::step) and
//! tells the caller how long to sleep before the next one. The caller owns
//! the loop and the sleep, so the animator works the same under an async
//! executor, an RTOS thread or a bare-metal super-loop.

use crate::config::ChaseConfig;
use crate::lines::{OutputLines, SharedLines, line_for_position};
use crate::state::AnimationState;
use crate::time::TimeDuration;
use crate::types::{LineId, Speed};

/// Result of one animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChaseStep<D> {
    /// Position that was drawn.
    pub position: u8,
    /// Physical line that was toggled.
    pub line: LineId,
    /// How long to suspend before the next cycle.
    pub delay: D,
}

/// Drives the chase from the shared [`AnimationState`].
pub struct ChaseAnimator<'a, O: OutputLines, D: TimeDuration> {
    state: &'a AnimationState,
    lines: &'a SharedLines<O>,
    fast_period: D,
    slow_period: D,
}

impl<'a, O: OutputLines, D: TimeDuration> ChaseAnimator<'a, O, D> {
    pub fn new(
        state: &'a AnimationState,
        lines: &'a SharedLines<O>,
        config: &ChaseConfig<D>,
    ) -> Self {
        Self {
            state,
            lines,
            fast_period: config.fast_period(),
            slow_period: config.slow_period(),
        }
    }

    /// Runs one cycle: toggle the line for the current position, advance the
    /// position in the current direction, and pick the delay for the current
    /// speed.
    ///
    /// Each field is read on its own; an event landing mid-cycle shows up at
    /// the latest on the next call.
    pub fn step(&self) -> ChaseStep<D> {
        let position = self.state.advance();
        let line = line_for_position(position);
        self.lines.toggle(line);

        ChaseStep {
            position,
            line,
            delay: self.delay_for(self.state.speed()),
        }
    }

    /// What the next [`step`](Self::step) would do, without doing it.
    pub fn peek(&self) -> ChaseStep<D> {
        let position = self.state.position();
        ChaseStep {
            position,
            line: line_for_position(position),
            delay: self.delay_for(self.state.speed()),
        }
    }

    /// Cycle period for `speed`.
    #[inline]
    pub fn delay_for(&self, speed: Speed) -> D {
        match speed {
            Speed::Fast => self.fast_period,
            Speed::Slow => self.slow_period,
        }
    }
}
