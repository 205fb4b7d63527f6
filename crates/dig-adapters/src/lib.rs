//! Infrastructure adapters for Dig.
//!
//! Implementations of the driven ports declared in `dig_core::application::ports`:
//!
//! - [`filesystem::LocalFilesystem`] - production filesystem via `std::fs`
//! - [`filesystem::MemoryFilesystem`] - in-memory filesystem for tests
//! - [`clock::SystemClock`] - wall clock via `chrono`
//! - [`clock::FixedClock`] - deterministic clock for tests

pub mod clock;
pub mod filesystem;

pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
