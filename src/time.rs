//! Time abstraction traits and the polled one-shot timer built on them.
//!
//! The click classifier never sleeps and never receives a completion callback.
//! It arms a [`OneShotTimer`] on the first press and polls it on the second,
//! so a timer only has to answer "has the deadline passed?" and "how much is
//! left?".

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// A polled one-shot timer.
///
/// Implement this directly for a hardware or RTOS timer, or use
/// [`DeadlineTimer`] on top of any [`TimeSource`].
pub trait OneShotTimer {
    /// Duration type accepted by [`start`](Self::start).
    type Duration: TimeDuration;

    /// Arms the timer to expire `duration` from now. Re-arming a running
    /// timer restarts it.
    fn start(&mut self, duration: Self::Duration);

    /// Returns true once the armed deadline has been reached.
    ///
    /// A timer that was stopped before its deadline reports `false`.
    fn elapsed(&self) -> bool;

    /// Time left before the deadline, or ZERO if expired or not running.
    fn remaining(&self) -> Self::Duration;
}

/// Internal state of a [`DeadlineTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState<I> {
    /// Never armed, or stopped before expiring.
    Stopped,
    /// Armed at `started` for `window_ms` milliseconds.
    Armed { started: I, window_ms: u64 },
}

/// One-shot timer that compares the time source against a stored deadline.
///
/// The window is half-open: at exactly `start + duration` the timer is
/// considered elapsed.
pub struct DeadlineTimer<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    state: TimerState<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> DeadlineTimer<'t, I, T> {
    /// Creates a stopped timer.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            state: TimerState::Stopped,
        }
    }

    /// Stops the timer without letting it expire.
    ///
    /// Only the owner of the timer can call this; afterwards `elapsed()` is
    /// false and `remaining()` is ZERO until the next `start`.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Returns true while armed and not yet elapsed.
    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Armed { .. }) && !self.elapsed()
    }

    fn since_start(&self) -> Option<(u64, u64)> {
        match self.state {
            TimerState::Stopped => None,
            TimerState::Armed { started, window_ms } => {
                let now = self.time_source.now();
                Some((now.duration_since(started).as_millis(), window_ms))
            }
        }
    }
}

impl<'t, I: TimeInstant, T: TimeSource<I>> OneShotTimer for DeadlineTimer<'t, I, T> {
    type Duration = I::Duration;

    fn start(&mut self, duration: Self::Duration) {
        self.state = TimerState::Armed {
            started: self.time_source.now(),
            window_ms: duration.as_millis(),
        };
    }

    fn elapsed(&self) -> bool {
        match self.since_start() {
            Some((since, window)) => since >= window,
            None => false,
        }
    }

    fn remaining(&self) -> Self::Duration {
        match self.since_start() {
            Some((since, window)) => {
                I::Duration::from_millis(window).saturating_sub(I::Duration::from_millis(since))
            }
            None => I::Duration::ZERO,
        }
    }
}
