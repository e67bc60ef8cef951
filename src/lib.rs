#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AnimationState`**: Direction, speed and position shared by the event handler and the animator
//! - **`ClickClassifier`**: Turns button presses into speed toggles (double click) and reversals
//! - **`ChaseAnimator`**: Toggles one line per cycle in `VISITING_ORDER` and reports the next delay
//! - **`OutputLines`**: Trait to implement for your output hardware
//! - **`SharedLines`**: Lock-per-access wrapper so both contexts can reach the lines
//! - **`OneShotTimer`**: Polled timer for the click window; `DeadlineTimer` implements it on a `TimeSource`
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ChaseConfig`** / **`ButtonMap`**: Validated startup configuration
//! - **`EventQueue`**: Optional bounded hand-off from interrupt context to a task
//!
//! The classifier never blocks and never fails; the animator never sleeps
//! itself. Both take the shared state by reference, so it usually lives in a
//! `static`.

pub mod animator;
pub mod classifier;
pub mod config;
pub mod lines;
pub mod queue;
pub mod state;
pub mod time;
pub mod types;

pub use animator::{ChaseAnimator, ChaseStep};
pub use classifier::{ClickClassifier, ClickOutcome, ClickWindow};
pub use config::{ButtonMap, ChaseConfig, ChaseConfigBuilder};
pub use lines::{OutputLines, SharedLines, VISITING_ORDER, line_for_position};
pub use queue::EventQueue;
pub use state::{AnimationSnapshot, AnimationState};
pub use time::{DeadlineTimer, OneShotTimer, TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonEvent, ConfigError, Direction, LineId, Speed};

/// Number of output lines the chase runs over.
pub const LINE_COUNT: usize = 4;
