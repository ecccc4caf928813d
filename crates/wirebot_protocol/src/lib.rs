//! Command keywords, parsed commands, and the line parser for Wirebot.
//!
//! One wire line becomes one [`Command`]:
//!
//! ```text
//! "move up 3"
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ TOKENIZE        │  → ["move", "up", "3"]
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ KEYWORD LOOKUP  │  → CommandKind::Move
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ SHAPE CHECK     │  → Command { Move, ["up", "3"] }
//! └─────────────────┘
//! ```
//!
//! Parsing is pure; operand semantics are the interpreter's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod keyword;
pub mod parser;

pub use command::Command;
pub use keyword::CommandKind;
pub use parser::parse;
