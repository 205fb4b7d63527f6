//! Implementation of the four `dig make:*` commands.
//!
//! Responsibility: resolve the project root, wire the core scaffold service
//! with production adapters, and display the result. No business logic lives
//! here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use dig_adapters::{LocalFilesystem, SystemClock};
use dig_core::{
    application::ScaffoldService,
    domain::{ProjectLayout, ResourceKind, TemplateSet},
};

use crate::{
    cli::{MakeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `dig make:*` command.
///
/// Dispatch sequence:
/// 1. Resolve the project root (`--root` flag > config file > `.`)
/// 2. Build the scaffold service with production adapters
/// 3. Generate exactly one file
/// 4. Report the written path
#[instrument(skip_all, fields(kind = %kind, name = %args.name))]
pub fn execute(
    kind: ResourceKind,
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = resolve_root(&global, &config);
    debug!(root = %root.display(), "project root resolved");

    let service = ScaffoldService::new(
        ProjectLayout::new(root),
        TemplateSet::builtin(),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock::new()),
    );

    let written = service.generate(kind, &args.name).map_err(CliError::Core)?;
    info!(path = %written.display(), "generation completed");

    output.success(&format!(
        "{} {} created at {}",
        capitalize(kind.as_str()),
        args.name,
        written.display()
    ))?;

    Ok(())
}

/// `--root` flag wins over the config file; the config default is `.`.
fn resolve_root(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .root
        .clone()
        .unwrap_or_else(|| config.project.root.clone())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
