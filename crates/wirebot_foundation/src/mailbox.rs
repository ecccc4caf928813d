//! The inbound command mailbox.
//!
//! Raw command lines arrive on a dedicated channel-reader thread and are
//! consumed on the simulation-tick thread, at most one per tick. The mailbox
//! is the single handoff point between the two: a cloneable, thread-safe,
//! unbounded FIFO of text lines.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A thread-safe FIFO of raw command lines.
///
/// Cloning is cheap and every clone shares the same queue. Both ends poll
/// without blocking: the reader pushes, the tick thread pops.
#[derive(Clone, Debug, Default)]
pub struct Mailbox {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl Mailbox {
    /// Creates a new empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line to the back of the mailbox.
    pub fn push(&self, line: impl Into<String>) {
        self.lock().push_back(line.into());
    }

    /// Removes and returns the oldest line, if any.
    #[must_use]
    pub fn pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    /// Returns the number of lines waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no lines are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Locks the queue, recovering from poisoning.
    ///
    /// A panicking pusher must not take the whole session down; the lines
    /// themselves are always in a consistent state.
    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
