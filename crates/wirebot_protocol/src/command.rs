//! Parsed commands.
//!
//! A [`Command`] is the structured form of one wire line: a keyword plus an
//! ordered list of positional operand tokens. Its `Display` impl renders the
//! canonical wire form, which the console transmits in place of the raw
//! operator input; `parse(command.to_string())` always reproduces the same
//! command.

use std::fmt;

use crate::keyword::CommandKind;

/// One parsed remote command.
///
/// Operands are positional and kind-dependent; their semantics are validated
/// at dispatch time, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    kind: CommandKind,
    operands: Vec<String>,
}

impl Command {
    /// Creates a command from a kind and its operand tokens.
    #[must_use]
    pub fn new(kind: CommandKind, operands: Vec<String>) -> Self {
        Self { kind, operands }
    }

    /// Creates a command with no operands.
    #[must_use]
    pub fn bare(kind: CommandKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Returns the command kind.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the positional operand tokens.
    #[must_use]
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Returns the operand at `index`, if present.
    #[must_use]
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(String::as_str)
    }

    /// Returns true if this command is the batch terminator.
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        self.kind.is_terminator()
    }
}

impl fmt::Display for Command {
    /// Renders the canonical wire form: keyword and operands joined by
    /// single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
