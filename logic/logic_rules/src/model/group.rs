//! Rule group model.

use std::sync::Arc;

use logic_core::id::{GroupId, TypeName};
use logic_core::types::{ContextRule, ExecutionContext, TemplateContext};

/// The contract a rule group implements.
///
/// The contract is what carries the rule-type marker: the concrete
/// rule-object type that groups implementing it govern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupContract {
    /// Name of the contract.
    pub name: String,

    /// The governed rule-object type, if the contract is marked.
    pub rule_type: Option<TypeName>,
}

impl GroupContract {
    /// A contract marked with the rule type it governs.
    pub fn new(name: impl Into<String>, rule_type: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            rule_type: Some(rule_type.into()),
        }
    }

    /// A contract without a rule-type marker.
    pub fn unmarked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule_type: None,
        }
    }
}

/// Binds a group key to an execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContextGroup {
    /// The key rules refer to.
    pub id: String,

    /// The bound context.
    pub context: ExecutionContext,
}

/// Binds a group key to a template context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContextGroup {
    /// The key rules refer to.
    pub id: String,

    /// The bound context.
    pub context: TemplateContext,
}

/// Binds a group key to a set of view names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContextGroup {
    /// The key rules refer to.
    pub id: String,

    /// The view names in the group.
    pub views: Vec<String>,
}

/// A named configuration unit of rules and context bindings.
///
/// Groups are built once and shared immutably (`Arc<RuleGroup>`) after
/// discovery. Their identity is their [`GroupId`].
#[derive(Debug, Clone)]
pub struct RuleGroup {
    id: GroupId,
    name: String,
    contract: GroupContract,
    rules: Vec<ContextRule>,
    execution_contexts: Vec<ExecutionContextGroup>,
    template_contexts: Vec<TemplateContextGroup>,
    view_contexts: Vec<ViewContextGroup>,
}

impl RuleGroup {
    /// Create an empty group implementing `contract`.
    pub fn new(name: impl Into<String>, contract: GroupContract) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            contract,
            rules: Vec::new(),
            execution_contexts: Vec::new(),
            template_contexts: Vec::new(),
            view_contexts: Vec::new(),
        }
    }

    /// Add a statically declared rule.
    pub fn with_rule(mut self, rule: ContextRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Bind `id` to an execution context.
    pub fn with_execution_context(mut self, id: impl Into<String>, context: ExecutionContext) -> Self {
        self.execution_contexts.push(ExecutionContextGroup {
            id: id.into(),
            context,
        });
        self
    }

    /// Bind `id` to a template context.
    pub fn with_template_context(mut self, id: impl Into<String>, context: TemplateContext) -> Self {
        self.template_contexts.push(TemplateContextGroup {
            id: id.into(),
            context,
        });
        self
    }

    /// Bind `id` to a set of view names.
    pub fn with_view_context<I, S>(mut self, id: impl Into<String>, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.view_contexts.push(ViewContextGroup {
            id: id.into(),
            views: views.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Finish building and share the group.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contract(&self) -> &GroupContract {
        &self.contract
    }

    /// The statically declared rules, in declaration order.
    pub fn rules(&self) -> &[ContextRule] {
        &self.rules
    }

    /// The first execution context bound to `key`.
    pub fn execution_context(&self, key: &str) -> Option<ExecutionContext> {
        self.execution_contexts
            .iter()
            .find(|group| group.id == key)
            .map(|group| group.context)
    }

    /// The first template context bound to `key`.
    pub fn template_context(&self, key: &str) -> Option<TemplateContext> {
        self.template_contexts
            .iter()
            .find(|group| group.id == key)
            .map(|group| group.context)
    }

    /// The view names of the first view-context group bound to `key`.
    pub fn view_names(&self, key: &str) -> Option<&[String]> {
        self.view_contexts
            .iter()
            .find(|group| group.id == key)
            .map(|group| group.views.as_slice())
    }
}

/// A discovered rule group paired with the rule-object type it governs.
#[derive(Debug, Clone)]
pub struct RegisteredGroup {
    /// The group.
    pub group: Arc<RuleGroup>,

    /// The governed rule-object type, taken from the group's contract.
    pub rule_type: TypeName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_binding_wins() {
        let group = RuleGroup::new("Appearance", GroupContract::new("IAppearanceRules", "AppearanceRule"))
            .with_execution_context("Main", ExecutionContext::VIEW_ACTIVATED)
            .with_execution_context("Main", ExecutionContext::OBJECT_CHANGED)
            .with_template_context("Popup", TemplateContext::PopupWindow)
            .with_view_context("Details", ["Invoice_DetailView", "CreditNote_DetailView"]);

        assert_eq!(
            group.execution_context("Main"),
            Some(ExecutionContext::VIEW_ACTIVATED)
        );
        assert_eq!(
            group.template_context("Popup"),
            Some(TemplateContext::PopupWindow)
        );
        assert_eq!(
            group.view_names("Details").map(|views| views.len()),
            Some(2)
        );
        assert_eq!(group.execution_context("Missing"), None);
        assert_eq!(group.view_names("Missing"), None);
    }

    #[test]
    fn test_unmarked_contract() {
        let contract = GroupContract::unmarked("IUntypedRules");
        assert!(contract.rule_type.is_none());
    }
}
