//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use logic_core::error::Result;
use logic_core::id::TypeName;
use logic_core::traits::{Permission, Principal, PrincipalProvider, Role};
use logic_core::types::{ContextRule, ExecutionContext, SecurityBackendKind, TemplateContext};
use logic_rules::{GroupContract, InMemoryTypeCatalog, RuleGroup};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a test log subscriber honouring `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A permission granted to a principal.
#[derive(Debug)]
pub struct GrantedPermission {
    class: TypeName,
    rule: Option<ContextRule>,
}

impl GrantedPermission {
    pub fn rule(class: &str, rule: ContextRule) -> Arc<dyn Permission> {
        Arc::new(Self {
            class: TypeName::new(class),
            rule: Some(rule),
        })
    }

    pub fn plain(class: &str) -> Arc<dyn Permission> {
        Arc::new(Self {
            class: TypeName::new(class),
            rule: None,
        })
    }
}

impl Permission for GrantedPermission {
    fn class(&self) -> &TypeName {
        &self.class
    }

    fn as_context_rule(&self) -> Option<&ContextRule> {
        self.rule.as_ref()
    }
}

pub struct SecurityRole {
    name: String,
    permissions: Vec<Arc<dyn Permission>>,
}

impl SecurityRole {
    pub fn new(name: &str, permissions: Vec<Arc<dyn Permission>>) -> Arc<dyn Role> {
        Arc::new(Self {
            name: name.to_string(),
            permissions,
        })
    }
}

impl Role for SecurityRole {
    fn name(&self) -> &str {
        &self.name
    }

    fn permissions(&self) -> Vec<Arc<dyn Permission>> {
        self.permissions.clone()
    }
}

/// A principal holding permissions directly.
pub struct User {
    name: String,
    permissions: Vec<Arc<dyn Permission>>,
}

impl User {
    pub fn new(name: &str, permissions: Vec<Arc<dyn Permission>>) -> Arc<dyn Principal> {
        Arc::new(Self {
            name: name.to_string(),
            permissions,
        })
    }
}

impl Principal for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn granted_permissions(&self) -> Option<Vec<Arc<dyn Permission>>> {
        Some(self.permissions.clone())
    }
}

/// A principal whose permissions come from its roles.
pub struct RoleUser {
    name: String,
    roles: Vec<Arc<dyn Role>>,
}

impl RoleUser {
    pub fn new(name: &str, roles: Vec<Arc<dyn Role>>) -> Arc<dyn Principal> {
        Arc::new(Self {
            name: name.to_string(),
            roles,
        })
    }
}

impl Principal for RoleUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> Option<Vec<Arc<dyn Role>>> {
        Some(self.roles.clone())
    }
}

/// A security backend whose principal can change between passes.
pub struct TestSecurity {
    kind: SecurityBackendKind,
    principal: Mutex<Option<Arc<dyn Principal>>>,
    reloads: AtomicUsize,
}

impl TestSecurity {
    pub fn new(kind: SecurityBackendKind) -> Arc<Self> {
        Arc::new(Self {
            kind,
            principal: Mutex::new(None),
            reloads: AtomicUsize::new(0),
        })
    }

    pub fn log_on(&self, principal: Arc<dyn Principal>) {
        *self.principal.lock() = Some(principal);
    }

    pub fn log_off(&self) {
        *self.principal.lock() = None;
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl PrincipalProvider for TestSecurity {
    fn backend_kind(&self) -> SecurityBackendKind {
        self.kind
    }

    fn current_principal(&self) -> Option<Arc<dyn Principal>> {
        self.principal.lock().clone()
    }

    fn force_reload_permissions(&self) -> Result<()> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Domain and rule-object types used throughout the tests.
pub fn catalog() -> Arc<InMemoryTypeCatalog> {
    Arc::new(
        InMemoryTypeCatalog::new()
            .with_root("Sales.Document")
            .with_type("Sales.Invoice", "Sales.Document")
            .with_type("Sales.CreditNote", "Sales.Invoice")
            .with_type("Sales.ProformaInvoice", "Sales.Invoice")
            .with_root("Sales.Customer")
            .with_root("Logic.LogicRule")
            .with_type("Logic.AppearanceRule", "Logic.LogicRule")
            .with_type("Logic.AppearancePermission", "Logic.AppearanceRule")
            .with_type("Logic.MasterDetailRule", "Logic.LogicRule")
            .with_type("Logic.MasterDetailPermission", "Logic.MasterDetailRule"),
    )
}

/// A group governing appearance rules with one static rule on invoices.
pub fn appearance_group() -> Arc<RuleGroup> {
    RuleGroup::new(
        "Appearance",
        GroupContract::new("IModelAppearanceLogic", "Logic.AppearanceRule"),
    )
    .with_execution_context("Activated", ExecutionContext::VIEW_ACTIVATED)
    .with_template_context("Detail", TemplateContext::View)
    .with_view_context("InvoiceViews", ["Invoice_DetailView", "Invoice_ListView"])
    .with_rule(
        ContextRule::new("HighlightOverdue", "Sales.Invoice")
            .with_index(1)
            .with_execution_context_group("Activated")
            .with_template_context_group("Detail")
            .with_view_context_group("InvoiceViews"),
    )
    .into_shared()
}

/// A group governing master-detail rules with a rule on the document root.
pub fn master_detail_group() -> Arc<RuleGroup> {
    RuleGroup::new(
        "MasterDetail",
        GroupContract::new("IModelMasterDetailLogic", "Logic.MasterDetailRule"),
    )
    .with_execution_context("Changed", ExecutionContext::OBJECT_CHANGED)
    .with_rule(
        ContextRule::new("ShowLines", "Sales.Document")
            .with_index(0)
            .with_execution_context_group("Changed"),
    )
    .into_shared()
}

pub fn ty(name: &str) -> TypeName {
    TypeName::new(name)
}
