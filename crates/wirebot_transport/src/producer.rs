//! The producer (console) side of a channel.
//!
//! The producer connects with the session handle it was spawned with,
//! waits for the consumer's sync sentinel, then writes newline-terminated
//! command lines. Every write blocks until the consumer's drain byte comes
//! back: the operator's next line is not accepted until the previous one
//! has been consumed on the far side.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;

use wirebot_foundation::{Error, Result};

use crate::{DRAIN_ACK, HANDSHAKE_SENTINEL};

/// A connected, handshaken producer endpoint.
#[derive(Debug)]
pub struct ProducerEndpoint {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    connected: bool,
}

impl ProducerEndpoint {
    /// Connects to the consumer named by the session handle and completes
    /// the synchronization handshake.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` on any I/O fault and `HandshakeFailed` if
    /// the consumer does not open with the sync sentinel.
    pub fn connect(handle: &str) -> Result<Self> {
        let stream = TcpStream::connect(handle).map_err(Error::channel_broken)?;
        let mut reader =
            BufReader::new(stream.try_clone().map_err(Error::channel_broken)?);

        let mut sentinel = String::new();
        reader
            .read_line(&mut sentinel)
            .map_err(Error::channel_broken)?;
        let received = sentinel.trim_end_matches(['\r', '\n']);
        if received != HANDSHAKE_SENTINEL {
            return Err(Error::handshake_failed(received));
        }

        // Acknowledge the sentinel so the consumer sees it drained.
        let mut stream = stream;
        stream
            .write_all(&[DRAIN_ACK])
            .and_then(|()| stream.flush())
            .map_err(Error::channel_broken)?;

        log::info!("channel to {handle} established");
        Ok(Self {
            stream,
            reader,
            connected: true,
        })
    }

    /// Sends one command line and blocks until the consumer drains it.
    ///
    /// # Errors
    ///
    /// Returns `ChannelBroken` on any fault; the endpoint is then dead and
    /// every further send fails.
    pub fn send_line(&mut self, line: &str) -> Result<()> {
        if !self.connected {
            return Err(Error::channel_broken(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "channel already closed",
            )));
        }

        let result = (|| -> std::io::Result<()> {
            self.stream.write_all(line.as_bytes())?;
            self.stream.write_all(b"\n")?;
            self.stream.flush()?;
            // Synchronous back-pressure: wait for the drain byte.
            let mut ack = [0u8; 1];
            self.reader.read_exact(&mut ack)?;
            Ok(())
        })();

        result.map_err(|err| {
            self.connected = false;
            Error::channel_broken(err)
        })
    }

    /// Returns true while the channel has not faulted.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}
