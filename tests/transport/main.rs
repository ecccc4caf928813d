//! Integration tests for the wirebot_transport crate.
//!
//! Channel lifecycle over real loopback sockets:
//! - Handshake and ordered line delivery
//! - Synchronous back-pressure
//! - Fault detection on either side
