//! The consumer (game-process) side of a channel.
//!
//! After the handshake, a dedicated thread performs blocking line reads for
//! the life of the connection and appends each line to the inbound mailbox,
//! so the simulation tick never waits on channel I/O. Every delivered line
//! is acknowledged with a single drain byte, which is what holds the
//! producer's synchronous back-pressure.
//!
//! Any I/O fault, including the peer closing, ends the read loop and marks
//! the channel disconnected. Faults are reported, never retried: a dead
//! session requires a fresh console spawn.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use wirebot_foundation::{Error, Mailbox, Result};

use crate::{DRAIN_ACK, HANDSHAKE_SENTINEL};

/// A live consumer endpoint with its reader thread.
///
/// Dropping the handle shuts the socket down and joins the reader thread.
#[derive(Debug)]
pub struct ConsumerHandle {
    stream: TcpStream,
    connected: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl ConsumerHandle {
    /// Performs the one-shot handshake and starts the reader thread.
    pub(crate) fn start(mut stream: TcpStream, mailbox: Mailbox) -> Result<Self> {
        // Send the sync sentinel and wait for the peer to drain it.
        stream
            .write_all(format!("{HANDSHAKE_SENTINEL}\n").as_bytes())
            .and_then(|()| stream.flush())
            .map_err(Error::channel_broken)?;

        let mut ack = [0u8; 1];
        stream
            .try_clone()
            .and_then(|mut s| s.read_exact(&mut ack))
            .map_err(Error::channel_broken)?;
        log::info!("handshake complete, channel is live");

        let connected = Arc::new(AtomicBool::new(true));
        let thread_stream = stream.try_clone().map_err(Error::channel_broken)?;
        let thread_connected = Arc::clone(&connected);
        let reader = std::thread::Builder::new()
            .name("wirebot-channel-reader".into())
            .spawn(move || read_loop(thread_stream, &mailbox, &thread_connected))
            .map_err(|e| Error::internal(format!("failed to start reader thread: {e}")))?;

        Ok(Self {
            stream,
            connected,
            reader: Some(reader),
        })
    }

    /// Returns true while the channel has not faulted.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

impl Drop for ConsumerHandle {
    fn drop(&mut self) {
        // Unblock the reader first, then join it.
        let _ = self.stream.shutdown(Shutdown::Both);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
        self.connected.store(false, Ordering::Release);
    }
}

/// Blocking read loop: one line in, one line enqueued, one drain byte out.
fn read_loop(stream: TcpStream, mailbox: &Mailbox, connected: &AtomicBool) {
    let result = (|| -> std::io::Result<()> {
        let mut writer = stream.try_clone()?;
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                // EOF: the producer went away.
                return Ok(());
            }
            let trimmed = line.trim_end_matches(['\r', '\n']);
            log::debug!("received line: {trimmed}");
            mailbox.push(trimmed);
            writer.write_all(&[DRAIN_ACK])?;
            writer.flush()?;
        }
    })();

    match result {
        Ok(()) => log::info!("console closed the channel"),
        Err(err) => log::warn!("channel broken: {err}"),
    }
    connected.store(false, Ordering::Release);
}
