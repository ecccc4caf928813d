//! Error types for the Wirebot system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

/// The main error type for Wirebot operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The raw command line that triggered the error, when one exists.
    pub command: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            command: None,
        }
    }

    /// Attaches the offending raw command line to this error.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Returns the raw command line this error was raised for, if any.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Creates a malformed command error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedCommand {
            message: message.into(),
        })
    }

    /// Creates an invalid operand error.
    #[must_use]
    pub fn invalid_operand(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOperand {
            message: message.into(),
        })
    }

    /// Creates a broken channel error from an I/O fault.
    #[must_use]
    pub fn channel_broken(source: std::io::Error) -> Self {
        Self::new(ErrorKind::ChannelBroken(source))
    }

    /// Creates a handshake failure error.
    #[must_use]
    pub fn handshake_failed(got: impl Into<String>) -> Self {
        Self::new(ErrorKind::HandshakeFailed { got: got.into() })
    }

    /// Creates a console spawn error.
    #[must_use]
    pub fn spawn(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Spawn(source))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error is a malformed command (lexical/shape failure).
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedCommand { .. })
    }

    /// Returns true if this error is fatal to the transport channel.
    #[must_use]
    pub fn is_channel_broken(&self) -> bool {
        matches!(self.kind, ErrorKind::ChannelBroken(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The first word of a line is not a recognized keyword, or required
    /// operands are absent. Discarded silently at the protocol layer.
    #[error("malformed command: {message}")]
    MalformedCommand {
        /// Description of the shape failure.
        message: String,
    },

    /// Keyword recognized but an operand value is semantically invalid.
    /// Surfaced as a reportable error at dispatch time.
    #[error("invalid operand: {message}")]
    InvalidOperand {
        /// Description of the offending operand.
        message: String,
    },

    /// I/O fault on the channel. Fatal to the session, never retried.
    #[error("channel broken: {0}")]
    ChannelBroken(#[source] std::io::Error),

    /// The peer did not produce the expected synchronization sentinel.
    #[error("handshake failed: expected the sync sentinel, got {got:?}")]
    HandshakeFailed {
        /// What the peer sent instead.
        got: String,
    },

    /// The console process could not be spawned.
    #[error("failed to spawn the console process: {0}")]
    Spawn(#[source] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenient result alias for Wirebot operations.
pub type Result<T> = std::result::Result<T, Error>;
