//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations of these traits live in the CLI crate.

mod ranking;

pub use ranking::*;
