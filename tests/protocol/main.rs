//! Integration tests for the wirebot_protocol crate.
//!
//! Tests for the command line grammar:
//! - Keyword lookup and shape checking
//! - Canonical serialization round-trips

mod parse_tests;
