//! Integration tests for the wirebot_interpreter crate.
//!
//! Tests for the queued, gated execution pipeline:
//! - Batch accumulation and terminator drains
//! - Movement-gate deferral and pendant retries
//! - The tick driver binding

mod batch_tests;
mod pendant_tests;
mod resolution_tests;
