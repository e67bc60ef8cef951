//! Shared test infrastructure for led-chase integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_chase::{LINE_COUNT, LineId, OutputLines, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Output Lines
// ============================================================================

/// A single call made on the output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCall {
    Set(u8, bool),
    Toggle(u8),
}

/// Mock output bank that tracks line levels and records every call
pub struct MockLines {
    levels: [bool; LINE_COUNT],
    calls: heapless::Vec<LineCall, 128>,
}

impl MockLines {
    pub fn new() -> Self {
        Self {
            levels: [false; LINE_COUNT],
            calls: heapless::Vec::new(),
        }
    }

    /// Creates lines with the given initial levels
    pub fn with_levels(levels: [bool; LINE_COUNT]) -> Self {
        Self {
            levels,
            calls: heapless::Vec::new(),
        }
    }

    pub fn levels(&self) -> [bool; LINE_COUNT] {
        self.levels
    }

    pub fn calls(&self) -> &[LineCall] {
        &self.calls
    }

    /// Lines passed to `toggle`, in call order
    pub fn toggled_lines(&self) -> heapless::Vec<u8, 128> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                LineCall::Toggle(line) => Some(*line),
                LineCall::Set(..) => None,
            })
            .collect()
    }
}

impl OutputLines for MockLines {
    fn set(&mut self, line: LineId, active: bool) {
        self.levels[usize::from(line)] = active;
        let _ = self.calls.push(LineCall::Set(line.0, active));
    }

    fn toggle(&mut self, line: LineId) {
        let level = &mut self.levels[usize::from(line)];
        *level = !*level;
        let _ = self.calls.push(LineCall::Toggle(line.0));
    }
}
