//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dig",
    bin_name = "dig",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{26cf} Boilerplate generator for MVC-style web projects",
    long_about = "Dig writes boilerplate files for controllers, models, \
                  middlewares, and migrations into a fixed project layout.",
    after_help = "EXAMPLES:\n\
        \x20 dig make:model User\n\
        \x20 dig make:controller admin/User\n\
        \x20 dig make:middleware auth\n\
        \x20 dig make:migration create_posts",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new controller.
    #[command(
        name = "make:controller",
        about = "Create a new controller",
        after_help = "EXAMPLES:\n\
            \x20 dig make:controller User\n\
            \x20 dig make:controller admin/User   # nested under admin/"
    )]
    MakeController(MakeArgs),

    /// Create a new mongoose model.
    #[command(
        name = "make:model",
        about = "Create a new mongoose model",
        after_help = "EXAMPLES:\n\
            \x20 dig make:model User"
    )]
    MakeModel(MakeArgs),

    /// Create a new middleware.
    #[command(
        name = "make:middleware",
        about = "Create a new middleware",
        after_help = "EXAMPLES:\n\
            \x20 dig make:middleware auth"
    )]
    MakeMiddleware(MakeArgs),

    /// Create a new migration.
    #[command(
        name = "make:migration",
        about = "Create a new migration",
        after_help = "EXAMPLES:\n\
            \x20 dig make:migration create_posts   # names the posts table"
    )]
    MakeMigration(MakeArgs),

    /// Run all pending migrations.
    #[command(about = "Run all pending migrations")]
    Migrate,
}

// ── make:* ────────────────────────────────────────────────────────────────────

/// Arguments shared by the four `make:*` subcommands.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Resource name. Controller names may be `/`-nested (`admin/User`);
    /// migration names follow `<description>_<tableName>`.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────
