//! Console REPL, host driver, and simulated character for Wirebot.
//!
//! This crate provides:
//! - [`ConsoleRepl`] - The operator-facing read-eval-print loop
//! - [`LineEditor`] / [`RustylineEditor`] - Line editing behind a trait seam
//! - [`SimCharacter`] - A destination-walking stand-in for the game character
//! - [`host`] - The consumer-process composition loop
//!
//! Binaries: `wirebot-console` (producer side) and `wirebot-host`
//! (consumer side, headless).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod host;
pub mod repl;
pub mod sim;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use host::HostConfig;
pub use repl::{CommandSink, ConsoleRepl, EXIT_COMMAND};
pub use sim::{SimCharacter, bind_character};
