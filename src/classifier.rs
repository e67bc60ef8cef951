//! Button-press classification.
//!
//! Provides [`ClickClassifier`], which turns raw presses into speed toggles
//! (double click on the speed button) and chase reversals (reverse button).
//! It runs wherever the input layer delivers events, so it never blocks,
//! never sleeps and cannot fail: anomalies come back as a [`ClickOutcome`].

use crate::config::ChaseConfig;
use crate::lines::{OutputLines, SharedLines};
use crate::queue::EventQueue;
use crate::state::AnimationState;
use crate::time::{OneShotTimer, TimeDuration};
use crate::types::{ButtonEvent, Direction, Speed};

/// Pending-click bookkeeping for the speed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickWindow {
    /// No first click waiting.
    #[default]
    Idle,
    /// A first click arrived and the window timer is armed.
    AwaitingSecondClick,
}

/// What a single event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickOutcome {
    /// First press on the speed button; the click window is now open.
    AwaitingSecondClick,

    /// Second press inside the window. Carries the new speed.
    SpeedToggled(Speed),

    /// Second press after the window closed. Nothing changed.
    WindowExpired,

    /// Window timer was stopped before expiring. Nothing changed.
    WindowCancelled,

    /// Lines cleared and chase reversed.
    Reversed { direction: Direction, position: u8 },

    /// A reserved button (3 or 4) was pressed.
    Reserved(u8),

    /// The input did not map to any button.
    Unrecognized(u32),
}

/// Classifies button presses and applies them to the shared animation state.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and lines
/// * `O` - Output line implementation
/// * `T` - One-shot timer used for the click window
pub struct ClickClassifier<'a, O: OutputLines, T: OneShotTimer> {
    state: &'a AnimationState,
    lines: &'a SharedLines<O>,
    timer: T,
    click_window: T::Duration,
    window: ClickWindow,
}

impl<'a, O: OutputLines, T: OneShotTimer> ClickClassifier<'a, O, T> {
    /// Creates an idle classifier. The classifier owns `timer` exclusively.
    pub fn new(
        state: &'a AnimationState,
        lines: &'a SharedLines<O>,
        timer: T,
        config: &ChaseConfig<T::Duration>,
    ) -> Self {
        Self {
            state,
            lines,
            timer,
            click_window: config.click_window(),
            window: ClickWindow::Idle,
        }
    }

    /// Handles one press.
    pub fn on_event(&mut self, event: ButtonEvent) -> ClickOutcome {
        match event {
            ButtonEvent::Speed => self.on_speed_press(),
            ButtonEvent::Reverse => {
                self.lines.clear_all();
                let (direction, position) = self.state.reverse();
                ClickOutcome::Reversed {
                    direction,
                    position,
                }
            }
            ButtonEvent::Reserved(button) => ClickOutcome::Reserved(button),
            ButtonEvent::Unrecognized(mask) => ClickOutcome::Unrecognized(mask),
        }
    }

    /// Handles every event currently in `queue`, reporting each outcome.
    ///
    /// Returns the number of events handled.
    pub fn drain<const N: usize>(
        &mut self,
        queue: &EventQueue<N>,
        mut report: impl FnMut(ButtonEvent, ClickOutcome),
    ) -> usize {
        let mut handled = 0;
        while let Some(event) = queue.pop() {
            let outcome = self.on_event(event);
            report(event, outcome);
            handled += 1;
        }
        handled
    }

    fn on_speed_press(&mut self) -> ClickOutcome {
        match self.window {
            ClickWindow::Idle => {
                self.window = ClickWindow::AwaitingSecondClick;
                self.timer.start(self.click_window);
                ClickOutcome::AwaitingSecondClick
            }
            ClickWindow::AwaitingSecondClick => {
                self.window = ClickWindow::Idle;

                if self.timer.elapsed() {
                    ClickOutcome::WindowExpired
                } else if self.timer.remaining() == <T::Duration as TimeDuration>::ZERO {
                    ClickOutcome::WindowCancelled
                } else {
                    ClickOutcome::SpeedToggled(self.state.toggle_speed())
                }
            }
        }
    }

    /// Returns true while a first click waits for its second.
    pub fn is_pending(&self) -> bool {
        self.window == ClickWindow::AwaitingSecondClick
    }

    pub fn window(&self) -> ClickWindow {
        self.window
    }
}
