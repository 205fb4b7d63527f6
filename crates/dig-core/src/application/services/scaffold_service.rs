//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Parse and validate the resource name
//! 2. Compute the target path under the configured layout
//! 3. Render the template with an explicit variable context
//! 4. Ensure the destination directory exists and write the file
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Clock, Filesystem},
    domain::{
        GeneratedFile, MigrationName, ProjectLayout, RenderContext, ResourceKind, ResourceName,
        TemplateSet,
    },
    error::DigResult,
};

/// Main scaffolding service.
///
/// Orchestrates name validation, path computation, rendering, and writing.
/// Re-running a generator for the same name overwrites the existing file;
/// that is the contract for a developer-facing scaffolding tool.
pub struct ScaffoldService {
    layout: ProjectLayout,
    templates: TemplateSet,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        layout: ProjectLayout,
        templates: TemplateSet,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            layout,
            templates,
            filesystem,
            clock,
        }
    }

    /// Generate one boilerplate file.
    ///
    /// This is the main use case - exactly one directory-ensure and one file
    /// write per invocation. Returns the path that was written.
    #[instrument(skip(self), fields(kind = %kind))]
    pub fn generate(&self, kind: ResourceKind, name: &str) -> DigResult<PathBuf> {
        let name = ResourceName::parse(kind, name)?;
        let file = self.plan(kind, &name)?;

        if let Some(parent) = file.path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        if self.filesystem.exists(&file.path) {
            debug!(path = %file.path.display(), "overwriting existing file");
        }
        self.filesystem.write_file(&file.path, &file.content)?;

        info!(path = %file.path.display(), "{kind} {name} created");
        Ok(file.path)
    }

    /// Compute the path and content a generator would write, without touching
    /// the filesystem. `generate` is `plan` plus the write.
    pub fn plan(&self, kind: ResourceKind, name: &ResourceName) -> DigResult<GeneratedFile> {
        let template = self.templates.get(kind)?;
        let context = self.context_for(kind, name);
        let content = template.render(&context);

        let mut path = self.layout.dir_for(kind);
        if kind.supports_namespaces() {
            path.push(name.namespace_path().as_path());
        }
        path.push(self.filename_for(kind, name));

        Ok(GeneratedFile::new(path, content))
    }

    /// The borrowed project layout (for display in the CLI).
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn context_for(&self, kind: ResourceKind, name: &ResourceName) -> RenderContext {
        let ctx = RenderContext::new(name.leaf());
        match kind {
            ResourceKind::Controller => {
                ctx.with_variable("CLASS", format!("{}Controller", name.leaf()))
            }
            ResourceKind::Migration => {
                let migration = MigrationName::from_resource(name);
                if !migration.has_table() {
                    warn!(
                        name = name.raw(),
                        "migration name has no '_' separator; table identifier will be empty"
                    );
                }
                ctx.with_variable("TABLE", migration.table())
            }
            ResourceKind::Model | ResourceKind::Middleware => ctx,
        }
    }

    fn filename_for(&self, kind: ResourceKind, name: &ResourceName) -> String {
        match kind {
            ResourceKind::Controller => format!("{}Controller.js", name.leaf()),
            ResourceKind::Model | ResourceKind::Middleware => format!("{}.js", name.leaf()),
            // Epoch-millis prefix keeps migration files lexically sorted in
            // creation order.
            ResourceKind::Migration => {
                format!("{}_{}.js", self.clock.epoch_millis(), name.raw())
            }
        }
    }
}
