//! Startup configuration: timing constants and the input pin map.

use crate::time::TimeDuration;
use crate::types::{ButtonEvent, ConfigError};

/// Default double-click window in milliseconds.
pub const DEFAULT_CLICK_WINDOW_MS: u64 = 1000;

/// Default cycle period at [`Speed::Fast`](crate::Speed::Fast) in milliseconds.
pub const DEFAULT_FAST_PERIOD_MS: u64 = 100;

/// Default cycle period at [`Speed::Slow`](crate::Speed::Slow) in milliseconds.
pub const DEFAULT_SLOW_PERIOD_MS: u64 = 250;

/// Input pins of the four buttons on the reference development kit.
pub const DEFAULT_BUTTON_PINS: [u8; 4] = [11, 12, 24, 25];

/// Timing configuration for the classifier and the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseConfig<D: TimeDuration> {
    click_window: D,
    fast_period: D,
    slow_period: D,
}

impl<D: TimeDuration> ChaseConfig<D> {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> ChaseConfigBuilder<D> {
        ChaseConfigBuilder::new()
    }

    /// Maximum gap between two presses that still counts as a double click.
    #[inline]
    pub fn click_window(&self) -> D {
        self.click_window
    }

    /// Delay after each cycle at fast speed.
    #[inline]
    pub fn fast_period(&self) -> D {
        self.fast_period
    }

    /// Delay after each cycle at slow speed.
    #[inline]
    pub fn slow_period(&self) -> D {
        self.slow_period
    }
}

impl<D: TimeDuration> Default for ChaseConfig<D> {
    fn default() -> Self {
        Self {
            click_window: D::from_millis(DEFAULT_CLICK_WINDOW_MS),
            fast_period: D::from_millis(DEFAULT_FAST_PERIOD_MS),
            slow_period: D::from_millis(DEFAULT_SLOW_PERIOD_MS),
        }
    }
}

/// Builder for [`ChaseConfig`] with validation on [`build`](Self::build).
#[derive(Debug, Clone, Copy)]
pub struct ChaseConfigBuilder<D: TimeDuration> {
    config: ChaseConfig<D>,
}

impl<D: TimeDuration> ChaseConfigBuilder<D> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: ChaseConfig::default(),
        }
    }

    pub fn click_window(mut self, window: D) -> Self {
        self.config.click_window = window;
        self
    }

    pub fn fast_period(mut self, period: D) -> Self {
        self.config.fast_period = period;
        self
    }

    pub fn slow_period(mut self, period: D) -> Self {
        self.config.slow_period = period;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// * `ZeroClickWindow` - the click window is zero
    /// * `ZeroPeriod` - either period is zero
    /// * `FastSlowerThanSlow` - the fast period exceeds the slow period
    pub fn build(self) -> Result<ChaseConfig<D>, ConfigError> {
        let config = self.config;

        if config.click_window.as_millis() == 0 {
            return Err(ConfigError::ZeroClickWindow);
        }

        if config.fast_period.as_millis() == 0 || config.slow_period.as_millis() == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        if config.fast_period.as_millis() > config.slow_period.as_millis() {
            return Err(ConfigError::FastSlowerThanSlow);
        }

        Ok(config)
    }
}

impl<D: TimeDuration> Default for ChaseConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps input pins to logical buttons.
///
/// The input layer reports which pin fired as a single-bit mask (bit `n` for
/// pin `n`); [`decode`](Self::decode) turns that into a [`ButtonEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMap {
    pins: [u8; 4],
}

impl ButtonMap {
    /// Creates a map from the pins of logical buttons 1 to 4.
    ///
    /// # Errors
    /// * `PinOutOfRange` - a pin is 32 or higher
    /// * `DuplicatePin` - two buttons share a pin
    pub fn new(pins: [u8; 4]) -> Result<Self, ConfigError> {
        for (i, &pin) in pins.iter().enumerate() {
            if pin >= 32 {
                return Err(ConfigError::PinOutOfRange { pin });
            }
            if pins[..i].contains(&pin) {
                return Err(ConfigError::DuplicatePin { pin });
            }
        }
        Ok(Self { pins })
    }

    /// Pin assigned to logical button `index` (0-based).
    pub fn pin(&self, index: usize) -> Option<u8> {
        self.pins.get(index).copied()
    }

    /// Single-bit mask for logical button `index` (0-based).
    pub fn mask(&self, index: usize) -> Option<u32> {
        self.pin(index).map(|pin| 1u32 << pin)
    }

    /// Decodes a pin mask into the logical button it belongs to.
    ///
    /// Masks that do not match exactly one configured pin, including masks with
    /// several bits set, become [`ButtonEvent::Unrecognized`].
    pub fn decode(&self, pin_mask: u32) -> ButtonEvent {
        match self.pins.iter().position(|&pin| pin_mask == 1u32 << pin) {
            Some(0) => ButtonEvent::Speed,
            Some(1) => ButtonEvent::Reverse,
            Some(index) => ButtonEvent::Reserved(index as u8 + 1),
            None => ButtonEvent::Unrecognized(pin_mask),
        }
    }
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            pins: DEFAULT_BUTTON_PINS,
        }
    }
}
