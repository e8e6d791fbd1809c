//! Resolved rule model.

use std::collections::HashSet;

use logic_core::id::{GroupId, TypeName};
use logic_core::types::{ExecutionContext, TemplateContext};

/// A context rule after its group bindings have been looked up.
///
/// Exactly one resolved rule is produced per context rule in a collection
/// pass; it is shared by the target type and all of its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    /// Identifier of the originating context rule.
    pub id: String,

    /// The domain type the rule was declared for.
    pub target: TypeName,

    /// The rule-object type governing this rule.
    pub rule_type: TypeName,

    /// The group that owns the rule's bindings.
    pub group: GroupId,

    /// Ordering index declared by the rule author.
    pub index: i32,

    /// When the rule is evaluated.
    pub execution_context: ExecutionContext,

    /// Where the rule is evaluated.
    pub template_context: TemplateContext,

    /// Views the rule is restricted to. Empty when no view-context group matched.
    pub views: HashSet<String>,
}

impl ResolvedRule {
    /// Whether the rule lists `view` among its views.
    pub fn applies_to_view(&self, view: &str) -> bool {
        self.views.contains(view)
    }

    /// Whether the rule's execution context overlaps `context`.
    pub fn is_active_in(&self, context: ExecutionContext) -> bool {
        self.execution_context.intersects(context)
    }
}
