//! Resource names and kinds.
//!
//! A resource name is the user-supplied token naming the artifact to
//! generate. Controller names may contain `/` separators to express nested
//! namespaces (`admin/User`); the final segment is the *leaf* and becomes the
//! identifier inside the generated file. All other kinds are flat.

use std::fmt;

use super::common::RelativePath;
use super::error::DomainError;

/// The four kinds of generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Controller,
    Model,
    Middleware,
    Migration,
}

impl ResourceKind {
    /// Lowercase noun used in messages and error text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Middleware => "middleware",
            Self::Migration => "migration",
        }
    }

    /// Only controllers may be nested under namespace directories.
    pub const fn supports_namespaces(&self) -> bool {
        matches!(self, Self::Controller)
    }

    /// All kinds, in CLI declaration order.
    pub const ALL: [ResourceKind; 4] = [
        Self::Controller,
        Self::Model,
        Self::Middleware,
        Self::Migration,
    ];
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated resource name: raw form, namespace segments, and leaf.
///
/// Invariants established by [`ResourceName::parse`]:
/// - the raw name and the leaf are non-empty
/// - no segment is empty
/// - flat kinds carry no namespace segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    raw: String,
    namespace: Vec<String>,
    leaf: String,
}

impl ResourceName {
    /// Parse and validate a raw name for the given resource kind.
    pub fn parse(kind: ResourceKind, raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(DomainError::EmptyResourceName {
                kind: kind.to_string(),
            });
        }

        let has_separator = raw.contains('/') || raw.contains('\\');
        if has_separator && !kind.supports_namespaces() {
            return Err(DomainError::SeparatorNotAllowed {
                kind: kind.to_string(),
                name: raw,
            });
        }

        if raw.starts_with('/') || raw.starts_with('\\') {
            return Err(DomainError::AbsolutePathNotAllowed { path: raw });
        }

        let mut segments: Vec<String> = raw
            .split(['/', '\\'])
            .map(str::to_string)
            .collect();

        if segments.iter().any(String::is_empty) {
            return Err(DomainError::EmptySegment {
                kind: kind.to_string(),
                name: raw,
            });
        }

        // Cannot fail: split always yields at least one element and empties
        // were rejected above.
        let leaf = segments.pop().unwrap_or_default();

        Ok(Self {
            raw,
            namespace: segments,
            leaf,
        })
    }

    /// The name exactly as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The final path segment - the identifier used inside templates.
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Namespace segments preceding the leaf (empty for flat names).
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Namespace segments joined into a relative directory path.
    pub fn namespace_path(&self) -> RelativePath {
        let mut path = RelativePath::new("");
        for segment in &self.namespace {
            path = path.join(segment);
        }
        path
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Migration-specific view of a resource name.
///
/// By convention a migration is named `<description>_<tableName>`; the token
/// after the first underscore is the table identifier. A name without an
/// underscore yields an **empty** table identifier - the generator still
/// succeeds and renders an anonymous skeleton (the CLI warns about it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationName {
    raw: String,
    table: String,
}

impl MigrationName {
    pub fn from_resource(name: &ResourceName) -> Self {
        let raw = name.raw().to_string();
        let table = raw.split('_').nth(1).unwrap_or("").to_string();
        Self { raw, table }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Table identifier extracted from the name; may be empty.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// `true` when the name followed the `<description>_<tableName>` convention.
    pub fn has_table(&self) -> bool {
        !self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // ── ResourceName ──────────────────────────────────────────────────────

    #[test]
    fn flat_name_parses() {
        let name = ResourceName::parse(ResourceKind::Model, "User").unwrap();
        assert_eq!(name.raw(), "User");
        assert_eq!(name.leaf(), "User");
        assert!(name.namespace().is_empty());
    }

    #[test]
    fn nested_controller_name_splits_namespace_and_leaf() {
        let name = ResourceName::parse(ResourceKind::Controller, "admin/billing/Invoice").unwrap();
        assert_eq!(name.leaf(), "Invoice");
        assert_eq!(name.namespace(), ["admin", "billing"]);
        assert_eq!(
            name.namespace_path().as_path(),
            Path::new("admin/billing")
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            ResourceName::parse(ResourceKind::Controller, ""),
            Err(DomainError::EmptyResourceName { .. })
        ));
        assert!(matches!(
            ResourceName::parse(ResourceKind::Model, "   "),
            Err(DomainError::EmptyResourceName { .. })
        ));
    }

    #[test]
    fn flat_kinds_reject_separators() {
        for kind in [
            ResourceKind::Model,
            ResourceKind::Middleware,
            ResourceKind::Migration,
        ] {
            assert!(matches!(
                ResourceName::parse(kind, "admin/User"),
                Err(DomainError::SeparatorNotAllowed { .. })
            ));
        }
    }

    #[test]
    fn controller_rejects_empty_segments() {
        assert!(matches!(
            ResourceName::parse(ResourceKind::Controller, "admin//User"),
            Err(DomainError::EmptySegment { .. })
        ));
        assert!(matches!(
            ResourceName::parse(ResourceKind::Controller, "admin/"),
            Err(DomainError::EmptySegment { .. })
        ));
    }

    #[test]
    fn leading_separator_is_rejected() {
        assert!(matches!(
            ResourceName::parse(ResourceKind::Controller, "/etc/User"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn backslash_counts_as_separator() {
        let name = ResourceName::parse(ResourceKind::Controller, "admin\\User").unwrap();
        assert_eq!(name.leaf(), "User");
        assert_eq!(name.namespace(), ["admin"]);
    }

    // ── MigrationName ─────────────────────────────────────────────────────

    #[test]
    fn table_is_token_after_first_underscore() {
        let name = ResourceName::parse(ResourceKind::Migration, "create_posts").unwrap();
        let migration = MigrationName::from_resource(&name);
        assert_eq!(migration.table(), "posts");
        assert!(migration.has_table());
    }

    #[test]
    fn only_second_token_becomes_table() {
        // "create_posts_index" names the posts table: the table identifier is
        // always the second underscore-separated token.
        let name = ResourceName::parse(ResourceKind::Migration, "create_posts_index").unwrap();
        assert_eq!(MigrationName::from_resource(&name).table(), "posts");
    }

    #[test]
    fn underscore_less_name_yields_empty_table() {
        let name = ResourceName::parse(ResourceKind::Migration, "initial").unwrap();
        let migration = MigrationName::from_resource(&name);
        assert_eq!(migration.table(), "");
        assert!(!migration.has_table());
    }
}
