//! Wirebot - remote command protocol and execution pipeline
//!
//! This crate re-exports all layers of the Wirebot system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wirebot_runtime    — Console REPL, host driver, simulated character
//! Layer 2: wirebot_transport  — Channel listener, producer/consumer endpoints
//!          wirebot_interpreter— Dispatch table, batch/pendant queues, tick driver
//! Layer 1: wirebot_protocol   — Command keywords, parsed commands, line parser
//! Layer 0: wirebot_foundation — Errors, vectors, directions, line mailbox
//! ```

pub use wirebot_foundation as foundation;
pub use wirebot_interpreter as interpreter;
pub use wirebot_protocol as protocol;
pub use wirebot_runtime as runtime;
pub use wirebot_transport as transport;
