//! Known rule groups.

use std::collections::HashSet;
use std::sync::Arc;

use logic_core::error::{ConfigurationError, Result};
use logic_core::id::{GroupId, TypeName};
use logic_core::traits::TypeCatalog;
use tracing::debug;

use crate::model::{RegisteredGroup, RuleGroup};

/// The rule groups known to a collector, in discovery order.
///
/// Every known group maps to exactly one governed rule-object type.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: Vec<RegisteredGroup>,
    known: HashSet<GroupId>,
}

impl GroupRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the groups in `candidates` that are not known yet.
    ///
    /// Fails without registering anything if a new group's contract carries
    /// no rule-type marker. Returns the number of newly registered groups.
    pub fn discover<I>(&mut self, candidates: I) -> Result<usize>
    where
        I: IntoIterator<Item = Arc<RuleGroup>>,
    {
        let mut pending = Vec::new();
        let mut pending_ids = HashSet::new();

        for group in candidates {
            if self.known.contains(&group.id()) || !pending_ids.insert(group.id()) {
                continue;
            }

            let rule_type = group.contract().rule_type.clone().ok_or_else(|| {
                ConfigurationError::MissingRuleType {
                    group: group.name().to_string(),
                }
            })?;

            pending.push(RegisteredGroup { group, rule_type });
        }

        let added = pending.len();
        for registered in pending {
            debug!(
                group = %registered.group.name(),
                rule_type = %registered.rule_type,
                "Registered rule group"
            );
            self.known.insert(registered.group.id());
            self.groups.push(registered);
        }

        Ok(added)
    }

    /// Whether a group with `id` is known.
    pub fn contains(&self, id: GroupId) -> bool {
        self.known.contains(&id)
    }

    /// All known groups, in discovery order.
    pub fn groups(&self) -> &[RegisteredGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The first group whose governed rule type `class` is assignable to.
    pub fn governing(&self, class: &TypeName, catalog: &dyn TypeCatalog) -> Result<&RegisteredGroup> {
        self.groups
            .iter()
            .find(|registered| catalog.is_assignable_from(&registered.rule_type, class))
            .ok_or_else(|| {
                ConfigurationError::UnknownRuleClass {
                    class: class.clone(),
                }
                .into()
            })
    }
}
