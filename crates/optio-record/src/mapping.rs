//! Declarative mapping specs
//!
//! A [`MappingSpec`] is an ordered list of rules, each producing one field
//! of the output record:
//! - same-name copy
//! - renamed copy
//! - function-transformed copy
//! - nested mapping into a sub-object
//!
//! The spec only describes the mapping; [`Mapper`](crate::Mapper) runs it.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Field transform used by [`FieldRule::Transform`]
pub type TransformFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// One output field of a mapping
#[derive(Clone)]
pub enum FieldRule {
    /// Copy `source[name]` to `target[name]`
    Copy(String),
    /// Copy `source[from]` to `target[to]`
    Rename { from: String, to: String },
    /// Write `f(source[from])` to `target[to]`
    Transform {
        from: String,
        to: String,
        f: TransformFn,
    },
    /// Map the object at `source[from]` with `spec`, write it to `target[to]`
    Nested {
        from: String,
        to: String,
        spec: MappingSpec,
    },
}

impl FieldRule {
    /// Source field this rule reads
    pub fn source(&self) -> &str {
        match self {
            FieldRule::Copy(name) => name,
            FieldRule::Rename { from, .. }
            | FieldRule::Transform { from, .. }
            | FieldRule::Nested { from, .. } => from,
        }
    }

    /// Target field this rule writes
    pub fn target(&self) -> &str {
        match self {
            FieldRule::Copy(name) => name,
            FieldRule::Rename { to, .. }
            | FieldRule::Transform { to, .. }
            | FieldRule::Nested { to, .. } => to,
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::Copy(name) => write!(f, "Copy({})", name),
            FieldRule::Rename { from, to } => write!(f, "Rename({} -> {})", from, to),
            FieldRule::Transform { from, to, .. } => write!(f, "Transform({} -> {})", from, to),
            FieldRule::Nested { from, to, spec } => {
                write!(f, "Nested({} -> {}, {:?})", from, to, spec.rules())
            }
        }
    }
}

/// Ordered set of field rules
#[derive(Clone, Debug, Default)]
pub struct MappingSpec {
    rules: Vec<FieldRule>,
}

impl MappingSpec {
    /// Empty spec
    pub fn new() -> Self {
        MappingSpec::default()
    }

    /// Copy a field under the same name
    pub fn copy(mut self, name: impl Into<String>) -> Self {
        self.rules.push(FieldRule::Copy(name.into()));
        self
    }

    /// Copy a field under a new name
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.rules.push(FieldRule::Rename {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Copy a field through `f`
    pub fn transform<F>(mut self, from: impl Into<String>, to: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.rules.push(FieldRule::Transform {
            from: from.into(),
            to: to.into(),
            f: Arc::new(f),
        });
        self
    }

    /// Recurse into a nested object with its own spec
    pub fn nested(mut self, from: impl Into<String>, to: impl Into<String>, spec: MappingSpec) -> Self {
        self.rules.push(FieldRule::Nested {
            from: from.into(),
            to: to.into(),
            spec,
        });
        self
    }

    /// Append a prebuilt rule
    pub fn push(&mut self, rule: FieldRule) {
        self.rules.push(rule);
    }

    /// Rules in output order
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
