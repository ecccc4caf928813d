//! Per-tick binding between the inbound mailbox and the interpreter.
//!
//! The game-side controller owns one [`TickDriver`] per controlled
//! character and calls [`TickDriver::tick`] once per simulation frame. The
//! driver is the only caller of the interpreter, so no two gated dispatches
//! ever run concurrently; the channel reader thread only ever touches the
//! mailbox.

use wirebot_foundation::{Mailbox, Result};

use crate::interpreter::Interpreter;

/// Drives one interpreter from one mailbox, one step per tick.
#[derive(Debug)]
pub struct TickDriver {
    interpreter: Interpreter,
    mailbox: Mailbox,
}

impl TickDriver {
    /// Creates a driver feeding the interpreter from the given mailbox.
    #[must_use]
    pub fn new(interpreter: Interpreter, mailbox: Mailbox) -> Self {
        Self {
            interpreter,
            mailbox,
        }
    }

    /// Runs one simulation tick:
    ///
    /// 1. drains at most one raw line from the mailbox into
    ///    [`Interpreter::execute`];
    /// 2. retries at most one pendant action.
    ///
    /// Both steps always run; an execute error does not suppress the
    /// pendant retry.
    ///
    /// # Errors
    ///
    /// Returns the first error the two steps raised. The caller is
    /// expected to report it and keep ticking.
    pub fn tick(&mut self) -> Result<()> {
        let executed = match self.mailbox.pop() {
            Some(line) => self.interpreter.execute(&line),
            None => Ok(()),
        };
        let retried = self.interpreter.next_pendant_action();
        executed.and(retried)
    }

    /// Returns true if no work remains anywhere in the pipeline.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.mailbox.is_empty() && self.interpreter.batched() == 0 && self.interpreter.pending() == 0
    }

    /// Returns the driven interpreter.
    #[must_use]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns the driven interpreter mutably.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Returns the mailbox this driver drains.
    #[must_use]
    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }
}
