//! Channel establishment.
//!
//! The consumer process creates the channel first: it binds a loopback
//! listener on an ephemeral port and hands the resulting address string to
//! the console process as its session handle. Exactly one producer connects
//! per channel; accepting consumes the listener.

use std::net::{Ipv4Addr, TcpListener};

use wirebot_foundation::{Error, Mailbox, Result};

use crate::consumer::ConsumerHandle;

/// A bound, not-yet-connected channel endpoint on the consumer side.
#[derive(Debug)]
pub struct ChannelListener {
    listener: TcpListener,
}

impl ChannelListener {
    /// Binds a loopback listener on an ephemeral port.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` if the listener cannot be bound.
    pub fn bind() -> Result<Self> {
        let listener =
            TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).map_err(Error::channel_broken)?;
        Ok(Self { listener })
    }

    /// Returns the session handle string the console process connects to.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` if the local address cannot be read.
    pub fn handle(&self) -> Result<String> {
        let addr = self.listener.local_addr().map_err(Error::channel_broken)?;
        Ok(addr.to_string())
    }

    /// Waits for the producer to connect, performs the synchronization
    /// handshake, and starts the reader thread feeding `mailbox`.
    ///
    /// Consumes the listener: a channel carries exactly one producer for
    /// its whole life. Blocks until a peer connects; there is no timeout.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` if accepting fails or the handshake cannot
    /// be written, and `HandshakeFailed` if the peer misbehaves.
    pub fn accept(self, mailbox: Mailbox) -> Result<ConsumerHandle> {
        let (stream, peer) = self.listener.accept().map_err(Error::channel_broken)?;
        log::info!("console connected from {peer}");
        ConsumerHandle::start(stream, mailbox)
    }
}
