//! Bounded hand-off of button events from interrupt context to a task.
//!
//! The classifier is cheap enough to run directly where events are delivered.
//! When the platform wants interrupt handlers kept minimal, push events here
//! instead and let a low-priority task [`drain`](crate::ClickClassifier::drain)
//! them.

use core::cell::RefCell;
use critical_section::Mutex;
use heapless::Deque;

use crate::types::ButtonEvent;

/// Fixed-capacity FIFO of pending button events.
pub struct EventQueue<const N: usize> {
    events: Mutex<RefCell<Deque<ButtonEvent, N>>>,
}

impl<const N: usize> EventQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Appends an event.
    ///
    /// Returns the event back if the queue is full; the caller decides
    /// whether dropping it is acceptable.
    pub fn push(&self, event: ButtonEvent) -> Result<(), ButtonEvent> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).push_back(event))
    }

    /// Removes the oldest event.
    pub fn pop(&self) -> Option<ButtonEvent> {
        critical_section::with(|cs| self.events.borrow_ref_mut(cs).pop_front())
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.events.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
