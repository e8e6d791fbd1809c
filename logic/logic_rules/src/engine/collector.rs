//! Logic rule collection.
//!
//! A collection pass rebuilds the whole rule registry:
//!
//! 1. pull new rule groups from every registered group source;
//! 2. take the rebuild lock;
//! 3. on complex security backends, force one permission reload;
//! 4. resolve the static rules of every known group;
//! 5. resolve the rules granted to the current principal, each through the
//!    group governing its class;
//! 6. publish the new table and release the lock;
//! 7. notify the "rules collected" sink.
//!
//! Steps 4 and 5 group resolved rules by target type and append each group
//! to its type and to every descendant type.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use logic_core::error::Result;
use logic_core::id::TypeName;
use logic_core::log_event;
use logic_core::traits::{Permission, PrincipalProvider, TypeCatalog};
use logic_core::types::{CollectTrigger, ContextRule};
use logic_core::utils::{CollectorConfig, RuleOrdering};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info};

use super::groups::GroupRegistry;
use super::notifier::RulesCollectedSink;
use crate::integration::RuleResolver;
use crate::model::{RegisteredGroup, ResolvedRule, RuleGroup};
use crate::store::{RuleRegistry, StagedRules};

/// Rule groups offered by group sources during discovery.
#[derive(Debug, Default)]
pub struct GroupDiscovery {
    groups: Vec<Arc<RuleGroup>>,
}

impl GroupDiscovery {
    /// Offer a group. Groups the collector already knows are ignored.
    pub fn add(&mut self, group: Arc<RuleGroup>) {
        self.groups.push(group);
    }

    /// Offer several groups.
    pub fn extend<I>(&mut self, groups: I)
    where
        I: IntoIterator<Item = Arc<RuleGroup>>,
    {
        self.groups.extend(groups);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A callback that offers rule groups at the start of every pass.
pub type GroupSource = Arc<dyn Fn(&mut GroupDiscovery) + Send + Sync>;

/// What a completed collection pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    /// What started the pass.
    pub trigger: CollectTrigger,

    /// Number of known rule groups.
    pub groups: usize,

    /// Rules resolved from rule groups.
    pub static_rules: usize,

    /// Rules resolved from the principal's permissions.
    pub permission_rules: usize,

    /// Types holding at least one rule after propagation.
    pub types: usize,
}

/// Rebuilds the rule registry from rule groups and granted permissions.
pub struct LogicRuleCollector {
    config: CollectorConfig,
    registry: Arc<RuleRegistry>,
    principals: Arc<dyn PrincipalProvider>,
    catalog: Arc<dyn TypeCatalog>,
    sink: Arc<dyn RulesCollectedSink>,
    resolver: RuleResolver,
    groups: RwLock<GroupRegistry>,
    sources: RwLock<Vec<GroupSource>>,
    rebuild_lock: Mutex<()>,
    permissions_reloaded: AtomicBool,
}

impl LogicRuleCollector {
    /// Create a collector with the default configuration.
    pub fn new(
        registry: Arc<RuleRegistry>,
        principals: Arc<dyn PrincipalProvider>,
        catalog: Arc<dyn TypeCatalog>,
        sink: Arc<dyn RulesCollectedSink>,
    ) -> Self {
        Self::with_config(CollectorConfig::default(), registry, principals, catalog, sink)
    }

    /// Create a collector with an explicit configuration.
    pub fn with_config(
        config: CollectorConfig,
        registry: Arc<RuleRegistry>,
        principals: Arc<dyn PrincipalProvider>,
        catalog: Arc<dyn TypeCatalog>,
        sink: Arc<dyn RulesCollectedSink>,
    ) -> Self {
        Self {
            config,
            registry,
            principals,
            catalog,
            sink,
            resolver: RuleResolver::new(),
            groups: RwLock::new(GroupRegistry::new()),
            sources: RwLock::new(Vec::new()),
            rebuild_lock: Mutex::new(()),
            permissions_reloaded: AtomicBool::new(false),
        }
    }

    /// Register a callback offering rule groups at the start of every pass.
    pub fn add_group_source<F>(&self, source: F)
    where
        F: Fn(&mut GroupDiscovery) + Send + Sync + 'static,
    {
        self.sources.write().push(Arc::new(source));
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// The registry this collector publishes into.
    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// The groups discovered so far, in discovery order.
    pub fn known_groups(&self) -> Vec<RegisteredGroup> {
        self.groups.read().groups().to_vec()
    }

    /// Whether this collector has already forced a permission reload.
    pub fn permissions_reloaded(&self) -> bool {
        self.permissions_reloaded.load(Ordering::Acquire)
    }

    /// Run a full collection pass.
    ///
    /// On error the registry keeps the table of the last successful pass
    /// and no notification is sent.
    pub fn collect(&self, trigger: CollectTrigger) -> Result<CollectionSummary> {
        let summary = self.rebuild(trigger).map_err(|e| {
            error!(%trigger, error = %e, "Logic rule collection failed");
            e
        })?;

        log_event!(self.config.log_level, "Logic rules collected",
            trigger => summary.trigger,
            groups => summary.groups,
            static_rules => summary.static_rules,
            permission_rules => summary.permission_rules,
            types => summary.types,
        );

        self.sink.rules_collected();
        Ok(summary)
    }

    fn rebuild(&self, trigger: CollectTrigger) -> Result<CollectionSummary> {
        self.discover_groups()?;

        let _rebuild = self.rebuild_lock.lock();
        self.reload_permissions_once()?;

        let groups = self.groups.read();
        let mut staged = StagedRules::default();

        let mut static_rules = 0;
        for owner in groups.groups() {
            static_rules += self.collect_pass(owner.group.rules().iter(), owner, &mut staged);
        }

        let mut permission_rules = 0;
        for (class, rules) in group_by_class(&self.granted_rule_permissions()) {
            let owner = groups.governing(&class, self.catalog.as_ref())?;
            permission_rules += self.collect_pass(rules.iter(), owner, &mut staged);
        }

        let summary = CollectionSummary {
            trigger,
            groups: groups.len(),
            static_rules,
            permission_rules,
            types: staged.type_count(),
        };
        self.registry.publish(staged);

        Ok(summary)
    }

    fn discover_groups(&self) -> Result<()> {
        let sources: Vec<GroupSource> = self.sources.read().clone();

        let mut discovery = GroupDiscovery::default();
        for source in &sources {
            source(&mut discovery);
        }

        if discovery.is_empty() {
            return Ok(());
        }

        let added = self.groups.write().discover(discovery.groups)?;
        if added > 0 {
            info!(added, "Discovered new rule groups");
        }
        Ok(())
    }

    fn reload_permissions_once(&self) -> Result<()> {
        if !self.config.reload_permissions_once
            || !self.principals.backend_kind().is_complex()
            || self.permissions_reloaded.load(Ordering::Acquire)
            || self.principals.current_principal().is_none()
        {
            return Ok(());
        }

        debug!("Forcing permission reload before first collection");
        self.principals.force_reload_permissions()?;
        self.permissions_reloaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Permissions of the current principal that carry a context rule.
    fn granted_rule_permissions(&self) -> Vec<Arc<dyn Permission>> {
        let Some(principal) = self.principals.current_principal() else {
            return Vec::new();
        };

        let permissions = if let Some(granted) = principal.granted_permissions() {
            granted
        } else if let Some(roles) = principal.roles() {
            let mut seen = HashSet::new();
            roles
                .iter()
                .flat_map(|role| role.permissions())
                .filter(|permission| seen.insert(Arc::as_ptr(permission) as *const ()))
                .collect()
        } else {
            Vec::new()
        };

        permissions
            .into_iter()
            .filter(|permission| permission.as_context_rule().is_some())
            .collect()
    }

    /// Resolve `rules`, group them by target, and append each group to its
    /// target and the target's descendants. Returns the number of rules.
    fn collect_pass<'a, I>(&self, rules: I, owner: &RegisteredGroup, staged: &mut StagedRules) -> usize
    where
        I: IntoIterator<Item = &'a ContextRule>,
    {
        let mut resolved: Vec<Arc<ResolvedRule>> = rules
            .into_iter()
            .map(|rule| Arc::new(self.resolver.resolve(rule, owner)))
            .collect();

        if self.config.ordering == RuleOrdering::IndexWithinPass {
            resolved.sort_by_key(|rule| rule.index);
        }

        let count = resolved.len();
        for (target, rules) in group_by_target(resolved) {
            staged.append(&target, &rules);
            if self.config.propagate_to_descendants {
                for descendant in self.catalog.descendants_of(&target) {
                    staged.append(&descendant, &rules);
                }
            }
        }

        count
    }
}

/// Group resolved rules by target type, in order of first appearance.
fn group_by_target(rules: Vec<Arc<ResolvedRule>>) -> Vec<(TypeName, Vec<Arc<ResolvedRule>>)> {
    let mut groups: Vec<(TypeName, Vec<Arc<ResolvedRule>>)> = Vec::new();
    let mut positions: HashMap<TypeName, usize> = HashMap::new();

    for rule in rules {
        match positions.get(&rule.target) {
            Some(&position) => groups[position].1.push(rule),
            None => {
                positions.insert(rule.target.clone(), groups.len());
                groups.push((rule.target.clone(), vec![rule]));
            }
        }
    }

    groups
}

/// Group the context rules of `permissions` by permission class, in order
/// of first appearance.
fn group_by_class(permissions: &[Arc<dyn Permission>]) -> Vec<(TypeName, Vec<ContextRule>)> {
    let mut groups: Vec<(TypeName, Vec<ContextRule>)> = Vec::new();
    let mut positions: HashMap<TypeName, usize> = HashMap::new();

    for permission in permissions {
        let Some(rule) = permission.as_context_rule() else {
            continue;
        };
        let class = permission.class();
        match positions.get(class) {
            Some(&position) => groups[position].1.push(rule.clone()),
            None => {
                positions.insert(class.clone(), groups.len());
                groups.push((class.clone(), vec![rule.clone()]));
            }
        }
    }

    groups
}
