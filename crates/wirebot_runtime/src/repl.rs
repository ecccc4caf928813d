//! The console read-eval-print loop.
//!
//! Reads operator lines, validates them client-side, and forwards the
//! canonical rendering of each well-formed command over the channel. The
//! literal `exit` ends the session. Malformed lines are reported to the
//! operator and the session continues; a broken channel is reported and
//! ends the loop.

use wirebot_foundation::Result;
use wirebot_protocol::parse;
use wirebot_transport::ProducerEndpoint;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The literal input that ends the console session.
pub const EXIT_COMMAND: &str = "exit";

/// Where the console sends its validated command lines.
///
/// Implemented by the transport producer; tests substitute a recorder.
pub trait CommandSink {
    /// Sends one command line to the game process.
    ///
    /// # Errors
    ///
    /// Returns a `ChannelBroken` error once the channel has faulted.
    fn send_line(&mut self, line: &str) -> Result<()>;
}

impl CommandSink for ProducerEndpoint {
    fn send_line(&mut self, line: &str) -> Result<()> {
        ProducerEndpoint::send_line(self, line)
    }
}

/// The interactive console.
pub struct ConsoleRepl<S: CommandSink, E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The outbound channel endpoint.
    sink: S,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Input prompt.
    prompt: String,
}

impl<S: CommandSink> ConsoleRepl<S, RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(sink: S) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(sink, editor))
    }
}

impl<S: CommandSink, E: LineEditor> ConsoleRepl<S, E> {
    /// Creates a console with the given editor.
    pub fn with_editor(sink: S, editor: E) -> Self {
        Self {
            editor,
            sink,
            show_banner: true,
            prompt: ">> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the input prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs the console loop until `exit`, EOF, or a dead channel.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Channel faults and
    /// malformed commands are reported to the operator, not returned.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Interrupted => {}
                ReadResult::Eof => break,
                ReadResult::Line(line) => {
                    if !self.handle_line(&line) {
                        break;
                    }
                }
            }
        }

        println!("Console session closed.");
        Ok(())
    }

    /// Processes one operator line. Returns false when the session ends.
    fn handle_line(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return true;
        }

        self.editor.add_history(trimmed);

        if trimmed == EXIT_COMMAND {
            return false;
        }

        match parse(trimmed) {
            Ok(command) => {
                if let Err(err) = self.sink.send_line(&command.to_string()) {
                    eprintln!("The channel to the game is gone: {err}");
                    return false;
                }
            }
            Err(err) => {
                eprintln!("Error parsing your command: {err}");
            }
        }

        true
    }

    fn print_banner(&self) {
        println!("Wirebot console ready, the character awaits your commands.");
        println!("Finish a batch with `end`; type `exit` to leave.");
        println!();
    }
}
