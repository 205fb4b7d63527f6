//! Dig Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Dig
//! boilerplate generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            dig-cli (CLI)                │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: Filesystem, Clock)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      dig-adapters (Infrastructure)      │
//! │  (LocalFilesystem, SystemClock, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ResourceName, Template, ProjectLayout)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dig_core::prelude::*;
//! # fn demo(filesystem: Box<dyn Filesystem>, clock: Box<dyn Clock>) -> DigResult<()> {
//! // 1. Describe the project layout
//! let layout = ProjectLayout::new(".");
//!
//! // 2. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(layout, TemplateSet::builtin(), filesystem, clock);
//! let written = service.generate(ResourceKind::Model, "User")?;
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{Clock, Filesystem},
    };
    pub use crate::domain::{
        GeneratedFile, MigrationName, ProjectLayout, RelativePath, RenderContext, ResourceKind,
        ResourceName, Template, TemplateSet,
    };
    pub use crate::error::{DigError, DigResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
