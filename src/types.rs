//! Core types shared by the classifier and the animator.

use crate::LINE_COUNT;

/// Travel direction of the chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Position increases each cycle.
    #[default]
    Forward,

    /// Position decreases each cycle.
    Reverse,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Position the chase restarts from after switching to this direction.
    ///
    /// Forward restarts at the first line, Reverse at the last.
    #[inline]
    pub fn start_position(self) -> u8 {
        match self {
            Direction::Forward => 0,
            Direction::Reverse => (LINE_COUNT - 1) as u8,
        }
    }

    /// Position following `position` when travelling in this direction.
    #[inline]
    pub fn next_position(self, position: u8) -> u8 {
        let n = LINE_COUNT as u8;
        let position = position % n;
        match self {
            Direction::Forward => (position + 1) % n,
            Direction::Reverse => (position + n - 1) % n,
        }
    }
}

/// Chase speed, selected by double-clicking the speed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Long delay between cycles.
    #[default]
    Slow,

    /// Short delay between cycles.
    Fast,
}

impl Speed {
    /// Returns the other speed.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Speed::Slow => Speed::Fast,
            Speed::Fast => Speed::Slow,
        }
    }
}

/// Identifier of a physical output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineId(pub u8);

impl From<u8> for LineId {
    fn from(id: u8) -> Self {
        LineId(id)
    }
}

impl From<LineId> for usize {
    fn from(id: LineId) -> Self {
        id.0 as usize
    }
}

/// A single press delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Logical button 1: double-click toggles speed.
    Speed,

    /// Logical button 2: clears the lines and reverses the chase.
    Reverse,

    /// Logical buttons 3 and 4. No behaviour.
    Reserved(u8),

    /// Input the button map does not know about (raw pin mask).
    Unrecognized(u32),
}

/// Startup configuration errors.
///
/// These are reported before the classifier or animator run; nothing after
/// startup produces an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Click window of zero length.
    ZeroClickWindow,

    /// Fast or slow period of zero length.
    ZeroPeriod,

    /// Fast period longer than the slow period.
    FastSlowerThanSlow,

    /// Input pin cannot be represented in a 32-bit pin mask.
    PinOutOfRange { pin: u8 },

    /// The same input pin was assigned to two buttons.
    DuplicatePin { pin: u8 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroClickWindow => {
                write!(f, "click window must be longer than zero")
            }
            ConfigError::ZeroPeriod => {
                write!(f, "chase periods must be longer than zero")
            }
            ConfigError::FastSlowerThanSlow => {
                write!(f, "fast period must not be longer than slow period")
            }
            ConfigError::PinOutOfRange { pin } => {
                write!(f, "input pin {} does not fit in a 32-bit pin mask", pin)
            }
            ConfigError::DuplicatePin { pin } => {
                write!(f, "input pin {} is assigned to more than one button", pin)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
