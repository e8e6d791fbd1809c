//! Per-type rule registry.

use std::collections::HashMap;
use std::sync::Arc;

use logic_core::id::TypeName;
use parking_lot::RwLock;

use crate::model::ResolvedRule;

/// A complete table of rules by target type.
pub type RuleMap = HashMap<TypeName, Vec<Arc<ResolvedRule>>>;

/// Maps target types to their ordered rule lists.
///
/// The registry holds the table built by the most recent completed
/// collection pass. A pass builds its table off to the side in
/// [`StagedRules`] and publishes it with a single swap, so `lookup` always
/// sees either the previous pass or the new one in full.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    snapshot: RwLock<Arc<RuleMap>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules for `ty`, in collection order. Unknown types have none.
    pub fn lookup(&self, ty: &TypeName) -> Vec<Arc<ResolvedRule>> {
        self.snapshot.read().get(ty).cloned().unwrap_or_default()
    }

    /// The rules for `ty` that satisfy `matcher`, in collection order.
    pub fn lookup_matching<F>(&self, ty: &TypeName, matcher: F) -> Vec<Arc<ResolvedRule>>
    where
        F: Fn(&ResolvedRule) -> bool,
    {
        self.snapshot
            .read()
            .get(ty)
            .map(|rules| rules.iter().filter(|r| matcher(r)).cloned().collect())
            .unwrap_or_default()
    }

    /// Every type with at least one rule, sorted by name.
    pub fn types(&self) -> Vec<TypeName> {
        let mut types: Vec<TypeName> = self.snapshot.read().keys().cloned().collect();
        types.sort();
        types
    }

    /// Number of types with at least one rule.
    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }

    /// The whole table of the last completed pass.
    pub fn snapshot(&self) -> Arc<RuleMap> {
        Arc::clone(&self.snapshot.read())
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.publish(StagedRules::default());
    }

    pub(crate) fn publish(&self, staged: StagedRules) {
        *self.snapshot.write() = Arc::new(staged.rules);
    }
}

/// A registry table under construction.
#[derive(Debug, Default)]
pub(crate) struct StagedRules {
    rules: RuleMap,
}

impl StagedRules {
    /// Append `rules` to the tail of `ty`'s list.
    pub(crate) fn append(&mut self, ty: &TypeName, rules: &[Arc<ResolvedRule>]) {
        if rules.is_empty() {
            return;
        }
        self.rules
            .entry(ty.clone())
            .or_default()
            .extend(rules.iter().cloned());
    }

    pub(crate) fn type_count(&self) -> usize {
        self.rules.len()
    }
}
