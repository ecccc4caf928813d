//! The line parser.
//!
//! Converts one raw text line into a [`Command`]. Pure and stateless:
//! identical input always yields an identical result, and it is safe to call
//! from any number of threads at once.
//!
//! Only lexical and shape failures are raised here ([`MalformedCommand`]):
//! an unrecognized first word, an empty line, or missing required operands.
//! Operand *semantics* (is `left` a valid turn direction, does the magnitude
//! parse as a number) are validated at dispatch time so that the two failure
//! classes stay distinguishable.
//!
//! [`MalformedCommand`]: wirebot_foundation::ErrorKind::MalformedCommand

use wirebot_foundation::{Error, Result};

use crate::command::Command;
use crate::keyword::CommandKind;

/// Parses one raw line into a command.
///
/// # Errors
///
/// Returns a `MalformedCommand` error when the line is empty, its first
/// whitespace-delimited word is not a recognized keyword, or the keyword
/// requires operands that are absent.
pub fn parse(raw: &str) -> Result<Command> {
    let mut words = raw.split_whitespace();

    let Some(head) = words.next() else {
        return Err(Error::malformed("empty command").with_command(raw));
    };

    let Some(kind) = CommandKind::from_keyword(head) else {
        return Err(Error::malformed(format!("unrecognized keyword `{head}`")).with_command(raw));
    };

    let operands: Vec<String> = words.map(str::to_owned).collect();

    if operands.len() < kind.min_operands() {
        return Err(Error::malformed(format!(
            "`{kind}` requires at least {} operand(s), got {}",
            kind.min_operands(),
            operands.len()
        ))
        .with_command(raw));
    }

    Ok(Command::new(kind, operands))
}
