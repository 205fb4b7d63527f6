//! Application layer - use-case orchestration.
//!
//! The only use case is scaffolding: compute a target path, render a
//! template, and write the result through the [`ports::Filesystem`] port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ScaffoldService;
