//! Templates and rendering.
//!
//! A template is a fixed string skeleton with `{{VARIABLE}}` placeholders.
//! Rendering goes through an explicit [`RenderContext`] variable map rather
//! than raw string interpolation, so a resource name can never collide with
//! template literal text.

use std::collections::HashMap;
use std::path::PathBuf;

use super::error::DomainError;
use super::resource::ResourceKind;

/// A fixed skeleton for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    kind: ResourceKind,
    body: &'static str,
}

impl Template {
    pub const fn new(kind: ResourceKind, body: &'static str) -> Self {
        Self { kind, body }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        self.body
    }

    /// Render the body by substituting context variables.
    pub fn render(&self, ctx: &RenderContext) -> String {
        ctx.render(self.body)
    }
}

/// The built-in templates, one per resource kind.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: HashMap<ResourceKind, Template>,
}

impl TemplateSet {
    /// The skeletons that ship with dig. Output is CommonJS / mongoose
    /// boilerplate matching the generated project's conventions.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        for (kind, body) in [
            (ResourceKind::Controller, CONTROLLER_TEMPLATE),
            (ResourceKind::Model, MODEL_TEMPLATE),
            (ResourceKind::Middleware, MIDDLEWARE_TEMPLATE),
            (ResourceKind::Migration, MIGRATION_TEMPLATE),
        ] {
            templates.insert(kind, Template::new(kind, body));
        }
        Self { templates }
    }

    pub fn get(&self, kind: ResourceKind) -> Result<&Template, DomainError> {
        self.templates
            .get(&kind)
            .ok_or_else(|| DomainError::MissingTemplate {
                kind: kind.to_string(),
            })
    }
}

const CONTROLLER_TEMPLATE: &str = "\
class {{CLASS}} {
  // Controller methods go here
}

module.exports = {{CLASS}};
";

const MODEL_TEMPLATE: &str = "\
const mongoose = require(\"mongoose\");

const {{NAME}}Schema = new mongoose.Schema({
  // Schema fields go here
});

const {{NAME}} = mongoose.model(\"{{NAME}}\", {{NAME}}Schema);

module.exports = {{NAME}};
";

const MIDDLEWARE_TEMPLATE: &str = "\
// {{NAME}} middleware
const {{NAME}}Middleware = (req, res, next) => {
  // Middleware logic goes here
  next();
};

module.exports = {{NAME}}Middleware;
";

const MIGRATION_TEMPLATE: &str = "\
// Migration: {{TABLE}}
// Put your migration logic here
const mongoose = require(\"mongoose\");

const {{TABLE}}Schema = new mongoose.Schema({
  // Schema fields go here
});

const {{TABLE}} = mongoose.model(\"{{TABLE}}\", {{TABLE}}Schema);

module.exports = {{TABLE}};
";

/// Context for template rendering.
///
/// A value object mapping placeholder names to values. Built-in variables are
/// `SCREAMING_SNAKE_CASE`:
///
/// | Variable | Meaning                                 |
/// |----------|-----------------------------------------|
/// | `NAME`   | Leaf resource name, e.g. `User`         |
/// | `CLASS`  | Class identifier, e.g. `UserController` |
/// | `TABLE`  | Migration table identifier (may be empty) |
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Original name as provided by the user, kept for display and logging.
    resource_name: String,

    /// Variable map for substitution. `HashMap` because order does not
    /// matter for simple replacement and lookups are O(1).
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(resource_name: impl Into<String>) -> Self {
        let name = resource_name.into();
        let mut variables = HashMap::new();
        variables.insert("NAME".to_string(), name.clone());
        Self {
            resource_name: name,
            variables,
        }
    }

    /// Add a variable, consuming self for fluent construction.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is; replacement is a single pass per
    /// variable, which is adequate for the small fixed skeletons involved.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// The on-disk artifact a generator produces: a path and rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
