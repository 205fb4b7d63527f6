//! Domain layer - pure scaffolding logic, no I/O.
//!
//! Everything in this module is deterministic and side-effect free: parsing
//! resource names, describing the project layout, and rendering templates
//! into [`GeneratedFile`] values. Actually touching the filesystem is the
//! application layer's job, through its ports.

pub mod common;
pub mod error;
pub mod layout;
pub mod resource;
pub mod template;

pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use layout::ProjectLayout;
pub use resource::{MigrationName, ResourceKind, ResourceName};
pub use template::{GeneratedFile, RenderContext, Template, TemplateSet};

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-cutting checks that span several domain types. Type-specific
    // tests live next to each type.

    #[test]
    fn controller_name_flows_into_layout_path() {
        let name = ResourceName::parse(ResourceKind::Controller, "admin/User").unwrap();
        let layout = ProjectLayout::new("/project");

        let dir = layout
            .dir_for(ResourceKind::Controller)
            .join(name.namespace_path().as_path());
        assert_eq!(
            dir,
            std::path::Path::new("/project/app/Http/Controllers/admin")
        );
        assert_eq!(name.leaf(), "User");
    }

    #[test]
    fn builtin_templates_render_with_standard_variables() {
        let set = TemplateSet::builtin();
        let ctx = RenderContext::new("User").with_variable("CLASS", "UserController");

        let body = set.get(ResourceKind::Controller).unwrap().render(&ctx);
        assert!(body.contains("class UserController"));
        assert!(!body.contains("{{"), "unrendered placeholder left in: {body}");
    }
}
