//! One console session, end to end.
//!
//! Ties the pieces together in the order the protocol requires: bind the
//! channel, spawn the console with the session handle, accept its
//! connection, hand lines to the mailbox. The session owns the console
//! process for its lifetime; there is no reconnection, a dead session is
//! replaced by starting a new one.

use std::path::Path;
use std::process::Child;

use wirebot_foundation::{Mailbox, Result};

use crate::channel::ChannelListener;
use crate::consumer::ConsumerHandle;
use crate::spawn::{locate_console, spawn_console_at};

/// A running console session: the spawned console process plus the live
/// consumer endpoint feeding the mailbox.
#[derive(Debug)]
pub struct ConsoleSession {
    console: Child,
    consumer: ConsumerHandle,
}

impl ConsoleSession {
    /// Starts a session with the default console executable.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` if the channel cannot be established and
    /// `Spawn` if the console process cannot be started.
    pub fn start(mailbox: Mailbox) -> Result<Self> {
        Self::start_with_console(&locate_console(), mailbox)
    }

    /// Starts a session with a specific console executable.
    ///
    /// Blocks until the spawned console connects and completes the
    /// handshake; there is no timeout.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` if the channel cannot be established and
    /// `Spawn` if the console process cannot be started.
    pub fn start_with_console(program: &Path, mailbox: Mailbox) -> Result<Self> {
        let listener = ChannelListener::bind()?;
        let handle = listener.handle()?;
        let console = spawn_console_at(program, &handle)?;
        let consumer = listener.accept(mailbox)?;
        Ok(Self { console, consumer })
    }

    /// Returns true while the channel to the console is up.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.consumer.is_connected()
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        // Normally the console has already exited (the operator typed
        // `exit` or the channel broke); reap it. If it is still running,
        // take it down with the session.
        match self.console.try_wait() {
            Ok(Some(status)) => log::info!("console exited with {status}"),
            Ok(None) => {
                log::info!("terminating console process");
                let _ = self.console.kill();
                let _ = self.console.wait();
            }
            Err(err) => log::warn!("could not reap console process: {err}"),
        }
    }
}
