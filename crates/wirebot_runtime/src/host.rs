//! The headless host loop.
//!
//! Composes a full consumer process the way the game would: one mailbox,
//! one console session, one interpreter bound to a character, one tick
//! loop. Runs until the console disconnects and every queued command has
//! been acted on (or the configured tick budget runs out).

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use wirebot_foundation::{Mailbox, Result};
use wirebot_interpreter::{Interpreter, TickDriver};
use wirebot_transport::ConsoleSession;

use crate::sim::{SimCharacter, bind_character};

/// Host configuration.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Stop after this many ticks regardless of session state.
    pub max_ticks: Option<u64>,
    /// Milliseconds per simulation tick.
    pub tick_ms: u64,
    /// Console executable override; defaults to the located binary.
    pub console: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_ticks: None,
            tick_ms: 50,
            console: None,
        }
    }
}

/// Runs one complete console session against a simulated character.
///
/// # Errors
///
/// Returns an error if the session cannot be established. Command errors
/// during the run are reported and survived, per the protocol contract.
pub fn run(config: &HostConfig) -> Result<()> {
    let mailbox = Mailbox::new();
    let session = match &config.console {
        Some(program) => ConsoleSession::start_with_console(program, mailbox.clone())?,
        None => ConsoleSession::start(mailbox.clone())?,
    };

    let character = Rc::new(RefCell::new(SimCharacter::new()));
    let mut driver = TickDriver::new(
        Interpreter::new(bind_character(&character)),
        mailbox,
    );

    let mut ticks: u64 = 0;
    loop {
        if let Err(err) = driver.tick() {
            // One bad line must not take the session down.
            match err.command() {
                Some(command) => log::warn!("rejected `{command}`: {err}"),
                None => log::warn!("command rejected: {err}"),
            }
        }
        character.borrow_mut().step();
        ticks += 1;

        if config.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("tick budget exhausted");
            break;
        }
        if !session.is_connected() && driver.is_idle() && character.borrow().can_move() {
            break;
        }

        thread::sleep(Duration::from_millis(config.tick_ms));
    }

    let character = character.borrow();
    log::info!(
        "session over after {ticks} ticks: position {}, heading {}, {} beep(s)",
        character.position(),
        character.heading(),
        character.beeps()
    );
    Ok(())
}
