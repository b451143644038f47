//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Fixed positions for each piece
//! - `proptest.rs` - Property-based tests over every square
//! - `serialization.rs` - Serialization round-trips (with the `serde` feature)

mod movegen;
