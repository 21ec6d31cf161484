//! Test utilities
//!
//! Recording mock implementations and test fixtures for unit testing.
//!
//! The recording mocks keep their data in memory and count calls, so tests
//! can assert on both resulting state and how often a port was used.
//! `mockall` is reserved for `GradingPolicy`, where per-call expectations
//! read better than a hand-written stub.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
