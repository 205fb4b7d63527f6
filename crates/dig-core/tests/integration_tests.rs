//! Integration tests for dig-core.
//!
//! Exercise the `ScaffoldService` end-to-end against the in-memory adapters,
//! covering the observable contract of every generator.

use std::path::Path;

use dig_adapters::{FixedClock, MemoryFilesystem};
use dig_core::prelude::*;

fn service_with(fs: MemoryFilesystem, clock: FixedClock) -> ScaffoldService {
    ScaffoldService::new(
        ProjectLayout::new("proj"),
        TemplateSet::builtin(),
        Box::new(fs),
        Box::new(clock),
    )
}

// ── model generator ───────────────────────────────────────────────────────────

#[test]
fn model_lands_at_exact_path_with_name_substituted() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(0));

    let written = service.generate(ResourceKind::Model, "User").unwrap();
    assert_eq!(written, Path::new("proj/app/Models/User.js"));

    let content = fs.read_file(&written).unwrap();
    assert!(content.contains("const UserSchema = new mongoose.Schema"));
    assert!(content.contains("const User = mongoose.model(\"User\", UserSchema)"));
    assert!(content.contains("module.exports = User;"));
}

#[test]
fn model_rejects_nested_names() {
    let service = service_with(MemoryFilesystem::new(), FixedClock::frozen(0));
    let err = service
        .generate(ResourceKind::Model, "admin/User")
        .unwrap_err();
    assert!(matches!(err, DigError::Domain(_)));
}

// ── middleware generator ──────────────────────────────────────────────────────

#[test]
fn middleware_lands_under_middlewares_root() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(0));

    let written = service.generate(ResourceKind::Middleware, "auth").unwrap();
    assert_eq!(written, Path::new("proj/app/Http/Middlewares/auth.js"));

    let content = fs.read_file(&written).unwrap();
    assert!(content.contains("const authMiddleware = (req, res, next)"));
    assert!(content.contains("module.exports = authMiddleware;"));
}

// ── controller generator ──────────────────────────────────────────────────────

#[test]
fn nested_controller_creates_intermediate_dirs_and_uses_leaf_identifier() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(0));

    let written = service
        .generate(ResourceKind::Controller, "admin/billing/Invoice")
        .unwrap();
    assert_eq!(
        written,
        Path::new("proj/app/Http/Controllers/admin/billing/InvoiceController.js")
    );
    assert!(fs.has_directory(Path::new("proj/app/Http/Controllers/admin")));
    assert!(fs.has_directory(Path::new("proj/app/Http/Controllers/admin/billing")));

    let content = fs.read_file(&written).unwrap();
    assert!(content.contains("class InvoiceController {"));
    assert!(content.contains("module.exports = InvoiceController;"));
    // Only the leaf segment names the class.
    assert!(!content.contains("admin"));
}

#[test]
fn flat_controller_works_too() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(0));

    let written = service.generate(ResourceKind::Controller, "User").unwrap();
    assert_eq!(
        written,
        Path::new("proj/app/Http/Controllers/UserController.js")
    );
}

// ── migration generator ───────────────────────────────────────────────────────

#[test]
fn migration_filename_carries_timestamp_and_name() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(1_700_000_000_000));

    let written = service
        .generate(ResourceKind::Migration, "create_posts")
        .unwrap();
    assert_eq!(
        written,
        Path::new("proj/database/migrations/1700000000000_create_posts.js")
    );

    let content = fs.read_file(&written).unwrap();
    assert!(content.contains("// Migration: posts"));
    assert!(content.contains("const posts = mongoose.model(\"posts\", postsSchema)"));
}

#[test]
fn migration_filenames_sort_lexically_in_creation_order() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::ticking(1_700_000_000_000, 1));

    service
        .generate(ResourceKind::Migration, "create_users")
        .unwrap();
    service
        .generate(ResourceKind::Migration, "create_posts")
        .unwrap();
    service
        .generate(ResourceKind::Migration, "create_comments")
        .unwrap();

    let mut names: Vec<String> = fs
        .list_files()
        .into_iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(
        names,
        [
            "1700000000000_create_users.js",
            "1700000000001_create_posts.js",
            "1700000000002_create_comments.js",
        ]
    );
}

#[test]
fn migration_without_underscore_renders_empty_table_without_crashing() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(42));

    let written = service.generate(ResourceKind::Migration, "initial").unwrap();
    assert_eq!(written, Path::new("proj/database/migrations/42_initial.js"));

    let content = fs.read_file(&written).unwrap();
    // The table identifier is empty - documented edge case of the
    // <description>_<tableName> convention.
    assert!(content.contains("// Migration: \n"));
    assert!(content.contains("const Schema = new mongoose.Schema"));
}

// ── overwrite semantics ───────────────────────────────────────────────────────

#[test]
fn rerunning_a_generator_overwrites_without_error() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(0));

    let first = service.generate(ResourceKind::Model, "User").unwrap();
    let second = service.generate(ResourceKind::Model, "User").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs.list_files().len(), 1);
}

// ── plan (dry path computation) ───────────────────────────────────────────────

#[test]
fn plan_computes_without_writing() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone(), FixedClock::frozen(7));

    let name = ResourceName::parse(ResourceKind::Model, "Post").unwrap();
    let file = service.plan(ResourceKind::Model, &name).unwrap();

    assert_eq!(file.path, Path::new("proj/app/Models/Post.js"));
    assert!(file.content.contains("PostSchema"));
    assert!(fs.list_files().is_empty());
}
