//! Core types, errors, and the inbound line mailbox for Wirebot.
//!
//! This crate provides:
//! - [`Error`] / [`ErrorKind`] / [`Result`] - Error types shared by every layer
//! - [`Vec3`] - Movement payload vector
//! - [`Direction`] - World-relative move directions
//! - [`Mailbox`] - Thread-safe FIFO of raw command lines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod mailbox;
pub mod vector;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use mailbox::Mailbox;
pub use vector::Vec3;
