//! Command handlers, one module per command family.

pub mod make;
pub mod migrate;
