//! Local byte-stream channel between the game process and its command
//! console.
//!
//! One channel per console session, exactly one producer and one consumer,
//! newline-delimited UTF-8 text, no further framing. The consumer creates
//! the channel and spawns the console; a one-shot `SYNC` handshake runs
//! before normal traffic; every line is acknowledged with a single drain
//! byte so the producer's writes stay synchronous.
//!
//! This crate provides:
//! - [`ChannelListener`] - Channel creation and the session handle string
//! - [`ConsumerHandle`] - Reader thread feeding the inbound [`Mailbox`]
//! - [`ProducerEndpoint`] - Console-side connect/handshake/send
//! - [`ConsoleSession`] - Bind + spawn + accept, tied to a process lifetime
//!
//! Documented limitations: no handshake or read timeouts (a silent peer
//! stalls the reader thread), no reconnection, no delivery guarantees
//! across process crashes.
//!
//! [`Mailbox`]: wirebot_foundation::Mailbox

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod channel;
pub mod consumer;
pub mod producer;
pub mod session;
pub mod spawn;

pub use channel::ChannelListener;
pub use consumer::ConsumerHandle;
pub use producer::ProducerEndpoint;
pub use session::ConsoleSession;
pub use spawn::{CONSOLE_BIN, console_executable, locate_console, spawn_console};

/// The fixed handshake sentinel the consumer opens every session with.
pub const HANDSHAKE_SENTINEL: &str = "SYNC";

/// The single byte acknowledging that a line has been drained.
pub(crate) const DRAIN_ACK: u8 = b'\n';
