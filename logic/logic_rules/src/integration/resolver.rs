//! Context rule resolution.

use std::collections::HashSet;

use logic_core::types::{ContextRule, ExecutionContext, TemplateContext};
use tracing::debug;

use crate::model::{RegisteredGroup, ResolvedRule};

/// Resolves context rules against their owning group.
///
/// Resolution never fails: a key that matches no binding falls back to the
/// "none" context, or to an empty view set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleResolver;

impl RuleResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolve `rule` against the bindings of `owner`.
    pub fn resolve(&self, rule: &ContextRule, owner: &RegisteredGroup) -> ResolvedRule {
        let group = &owner.group;

        let execution_context = match rule.execution_context_group.as_deref() {
            Some(key) => group.execution_context(key).unwrap_or_else(|| {
                debug!(rule = %rule.id, group = %group.name(), key, "No execution context group matched");
                ExecutionContext::NONE
            }),
            None => ExecutionContext::NONE,
        };

        let template_context = match rule.template_context_group.as_deref() {
            Some(key) => group.template_context(key).unwrap_or_else(|| {
                debug!(rule = %rule.id, group = %group.name(), key, "No template context group matched");
                TemplateContext::None
            }),
            None => TemplateContext::None,
        };

        let mut views = HashSet::new();
        if let Some(key) = rule.view_context_group.as_deref() {
            match group.view_names(key) {
                Some(names) => views.extend(names.iter().cloned()),
                None => {
                    debug!(rule = %rule.id, group = %group.name(), key, "No view context group matched")
                }
            }
        }

        ResolvedRule {
            id: rule.id.clone(),
            target: rule.target.clone(),
            rule_type: owner.rule_type.clone(),
            group: group.id(),
            index: rule.index,
            execution_context,
            template_context,
            views,
        }
    }
}
