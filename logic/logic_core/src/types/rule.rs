//! Raw context rule declarations.

use crate::id::TypeName;

/// A raw rule declaration.
///
/// Context rules are either declared statically inside a rule group or
/// granted to a principal as permissions. Either way they name a target
/// type and refer to the owning group's context bindings by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRule {
    /// Identifier of the rule within its group.
    pub id: String,

    /// The domain type the rule applies to.
    pub target: TypeName,

    /// Ordering index declared by the rule author.
    pub index: i32,

    /// Key of the view-context group supplying view names.
    pub view_context_group: Option<String>,

    /// Key of the execution-context group.
    pub execution_context_group: Option<String>,

    /// Key of the template-context group.
    pub template_context_group: Option<String>,
}

impl ContextRule {
    /// Create a rule targeting `target` with no context group keys.
    pub fn new(id: impl Into<String>, target: impl Into<TypeName>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            index: 0,
            view_context_group: None,
            execution_context_group: None,
            template_context_group: None,
        }
    }

    /// Set the ordering index.
    pub fn with_index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Set the view-context group key.
    pub fn with_view_context_group(mut self, key: impl Into<String>) -> Self {
        self.view_context_group = Some(key.into());
        self
    }

    /// Set the execution-context group key.
    pub fn with_execution_context_group(mut self, key: impl Into<String>) -> Self {
        self.execution_context_group = Some(key.into());
        self
    }

    /// Set the template-context group key.
    pub fn with_template_context_group(mut self, key: impl Into<String>) -> Self {
        self.template_context_group = Some(key.into());
        self
    }
}
