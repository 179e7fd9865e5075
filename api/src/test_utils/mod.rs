//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//!
//! The in-memory repositories are plain manual implementations; `mockall`
//! is reserved for injecting failures into a port (see `vending_service`).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
