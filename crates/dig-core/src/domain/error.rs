//! Domain errors - violations of the naming rules for generated resources.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry with corrected input)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("{kind} name cannot be empty")]
    EmptyResourceName { kind: String },

    /// A `/`-delimited name like `admin//User` or `admin/` has a hole in it.
    #[error("invalid {kind} name '{name}': empty path segment")]
    EmptySegment { kind: String, name: String },

    /// Models, middlewares, and migrations are flat; only controllers
    /// support nested namespaces.
    #[error("{kind} name '{name}' cannot contain path separators")]
    SeparatorNotAllowed { kind: String, name: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("no template registered for resource kind '{kind}'")]
    MissingTemplate { kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyResourceName { kind } => vec![
                format!("Provide a name, e.g. dig make:{} User", kind),
            ],
            Self::EmptySegment { name, .. } => vec![
                format!("'{}' contains an empty segment", name),
                "Write nested names as namespace/Leaf, e.g. admin/User".into(),
            ],
            Self::SeparatorNotAllowed { kind, .. } => vec![
                format!("{} names are flat - nesting is only supported for controllers", kind),
                "Use a plain name, e.g. User".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is an absolute path", path),
                "Resource names are resolved relative to the project root".into(),
            ],
            Self::MissingTemplate { .. } => vec![
                "The built-in template set is incomplete".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingTemplate { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

/// Coarse error classes used by the CLI for styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
