//! The queued, gated command interpreter.
//!
//! Commands accumulate in a batch queue until a terminator line arrives;
//! the terminator drains the whole batch in FIFO order through gated
//! dispatch. A command that comes due while the movement gate is closed is
//! parked on the pendant queue, from which the tick driver retries at most
//! one entry per tick.
//!
//! Both queues are instance state: one interpreter per controlled
//! character, with no hidden coupling between instances.

use std::collections::VecDeque;

use wirebot_foundation::{Direction, Error, Result};
use wirebot_protocol::{Command, CommandKind, parse};

use crate::handlers::Handlers;

/// Magnitude used when a `move` line omits its second operand or carries
/// one that does not parse as a number.
const DEFAULT_MOVE_MAGNITUDE: f32 = 1.0;

/// The command interpreter for one controlled character.
#[derive(Debug)]
pub struct Interpreter {
    handlers: Handlers,
    batch: VecDeque<Command>,
    pendant: VecDeque<Command>,
}

impl Interpreter {
    /// Creates an interpreter dispatching through the given handler table.
    #[must_use]
    pub fn new(handlers: Handlers) -> Self {
        Self {
            handlers,
            batch: VecDeque::new(),
            pendant: VecDeque::new(),
        }
    }

    /// Executes one raw command line.
    ///
    /// A line that fails to parse is discarded: the protocol is lossy on
    /// malformed input by design, and a bad line must never block the
    /// channel. A non-terminator line is queued. A terminator drains the
    /// accumulated batch in arrival order, leaving the batch queue empty
    /// even when individual commands fail.
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidOperand` error raised while draining a
    /// batch. The caller is expected to report it and keep the session
    /// alive.
    pub fn execute(&mut self, raw: &str) -> Result<()> {
        let command = match parse(raw) {
            Ok(command) => command,
            Err(err) => {
                log::debug!("discarding malformed line: {err}");
                return Ok(());
            }
        };

        if command.is_terminator() {
            self.flush_batch()
        } else {
            self.batch.push_back(command);
            Ok(())
        }
    }

    /// Retries at most one pendant action.
    ///
    /// Called once per simulation tick. If the movement gate is closed or
    /// nothing is pending, this does nothing and the pendant queue keeps
    /// its length. A popped entry re-enters gated dispatch and may be
    /// deferred again.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidOperand` error raised by the retried command.
    pub fn next_pendant_action(&mut self) -> Result<()> {
        if !self.handlers.gate_open() {
            return Ok(());
        }
        match self.pendant.pop_front() {
            Some(command) => self.dispatch(command),
            None => Ok(()),
        }
    }

    /// Number of commands accumulated toward the next terminator.
    #[must_use]
    pub fn batched(&self) -> usize {
        self.batch.len()
    }

    /// Number of actions deferred by the movement gate.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pendant.len()
    }

    /// Drains the batch queue through gated dispatch.
    ///
    /// The queue is always emptied; a failing command does not abandon the
    /// entries after it. The first error is returned once the drain is
    /// complete.
    fn flush_batch(&mut self) -> Result<()> {
        let mut first_error = None;
        while let Some(command) = self.batch.pop_front() {
            if let Err(err) = self.dispatch(command) {
                log::warn!("command failed during batch drain: {err}");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Gated dispatch: defer when the gate is closed, otherwise route by
    /// command kind.
    fn dispatch(&mut self, command: Command) -> Result<()> {
        if !self.handlers.gate_open() {
            self.pendant.push_back(command);
            return Ok(());
        }

        match command.kind() {
            CommandKind::Move => self.dispatch_move(&command),
            CommandKind::Turn => self.dispatch_turn(&command),
            CommandKind::Stop => {
                self.handlers.fire_halt();
                Ok(())
            }
            CommandKind::Beep => {
                self.handlers.fire_beep();
                Ok(())
            }
            CommandKind::Signal => {
                // A value other than on/off is a silent no-op.
                match command.operand(0) {
                    Some("on") => self.handlers.fire_signal(true),
                    Some("off") => self.handlers.fire_signal(false),
                    _ => {}
                }
                Ok(())
            }
            CommandKind::Marker => {
                // A value other than down/up is a silent no-op.
                match command.operand(0) {
                    Some("down") => self.handlers.fire_marker(true),
                    Some("up") => self.handlers.fire_marker(false),
                    _ => {}
                }
                Ok(())
            }
            // The terminator never reaches the queues; nothing to do.
            CommandKind::End => Ok(()),
        }
    }

    /// Routes a `move` command.
    ///
    /// A direction keyword resolves to a unit-axis vector scaled by the
    /// optional magnitude operand (falling back to 1.0 when absent or
    /// unparsable). A bare numeric first operand means "continue along the
    /// current heading for this many units" and routes to the
    /// current-heading handler instead.
    fn dispatch_move(&mut self, command: &Command) -> Result<()> {
        let first = command.operand(0).unwrap_or_default();

        if let Ok(direction) = first.parse::<Direction>() {
            let magnitude = command
                .operand(1)
                .and_then(|raw| raw.parse::<f32>().ok())
                .unwrap_or(DEFAULT_MOVE_MAGNITUDE);
            self.handlers.fire_move(direction.vector(magnitude));
            Ok(())
        } else if let Ok(length) = first.parse::<f32>() {
            self.handlers.fire_move_current(length);
            Ok(())
        } else {
            Err(Error::invalid_operand(format!(
                "`{first}` is neither a direction nor a length"
            ))
            .with_command(command.to_string()))
        }
    }

    /// Routes a `turn` command. Shape and value violations are reportable.
    fn dispatch_turn(&mut self, command: &Command) -> Result<()> {
        let (Some(direction), Some(raw_degrees)) = (command.operand(0), command.operand(1)) else {
            return Err(Error::invalid_operand(
                "a turn needs a direction (left or right) and a value in degrees, \
                 for example: turn left 90",
            )
            .with_command(command.to_string()));
        };

        let sign = match direction {
            "left" => 1.0,
            "right" => -1.0,
            _ => {
                return Err(
                    Error::invalid_operand("the turn direction must be left or right")
                        .with_command(command.to_string()),
                );
            }
        };

        let Ok(degrees) = raw_degrees.parse::<f32>() else {
            return Err(Error::invalid_operand("the turn degrees must be a number")
                .with_command(command.to_string()));
        };

        self.handlers.fire_turn(sign * degrees);
        Ok(())
    }
}
