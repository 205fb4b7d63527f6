//! Project layout - where each resource kind lives on disk.
//!
//! The layout is explicit configuration rather than process-wide state: the
//! service receives a `ProjectLayout` and never consults the current working
//! directory, so tests can point it at a temporary directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::resource::ResourceKind;

/// Directory layout rooted at a project directory.
///
/// The sub-paths are fixed by convention:
///
/// | Kind       | Directory                   |
/// |------------|-----------------------------|
/// | controller | `app/Http/Controllers`      |
/// | model      | `app/Models`                |
/// | middleware | `app/Http/Middlewares`      |
/// | migration  | `database/migrations`       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.root.join("app").join("Http").join("Controllers")
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join("app").join("Models")
    }

    pub fn middlewares_dir(&self) -> PathBuf {
        self.root.join("app").join("Http").join("Middlewares")
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.root.join("database").join("migrations")
    }

    /// Root directory for a resource kind.
    pub fn dir_for(&self, kind: ResourceKind) -> PathBuf {
        match kind {
            ResourceKind::Controller => self.controllers_dir(),
            ResourceKind::Model => self.models_dir(),
            ResourceKind::Middleware => self.middlewares_dir(),
            ResourceKind::Migration => self.migrations_dir(),
        }
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_follow_fixed_convention() {
        let layout = ProjectLayout::new("/p");
        assert_eq!(
            layout.controllers_dir(),
            Path::new("/p/app/Http/Controllers")
        );
        assert_eq!(layout.models_dir(), Path::new("/p/app/Models"));
        assert_eq!(
            layout.middlewares_dir(),
            Path::new("/p/app/Http/Middlewares")
        );
        assert_eq!(layout.migrations_dir(), Path::new("/p/database/migrations"));
    }

    #[test]
    fn dir_for_covers_all_kinds() {
        let layout = ProjectLayout::new("x");
        for kind in ResourceKind::ALL {
            assert!(layout.dir_for(kind).starts_with("x"));
        }
    }

    #[test]
    fn default_layout_is_cwd_relative() {
        assert_eq!(ProjectLayout::default().root(), Path::new("."));
    }
}
