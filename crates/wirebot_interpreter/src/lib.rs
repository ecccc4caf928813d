//! Gated command interpreter, batch/pendant queues, and tick driver.
//!
//! This crate provides:
//! - [`Handlers`] - The late-bound dispatch table of capability callbacks
//! - [`Interpreter`] - Batch accumulation, gated dispatch, pendant retries
//! - [`TickDriver`] - The once-per-frame binding to the inbound mailbox

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod handlers;
pub mod interpreter;

pub use driver::TickDriver;
pub use handlers::Handlers;
pub use interpreter::Interpreter;
