//! # Logic Rules
//!
//! `logic_rules` collects behavioral rules for domain types and makes them
//! available for fast per-type lookup.
//!
//! Rules come from two sources:
//!
//! 1. **Rule groups**: configuration units declaring static rules and the
//!    context bindings those rules refer to.
//!
//! 2. **Permissions**: rules granted to the authenticated principal, either
//!    directly or through its roles.
//!
//! A collection pass resolves every rule against its owning group, groups
//! the results by target type, and propagates each type's rules to all of
//! its descendant types. The finished table is published to the
//! [`RuleRegistry`] in one swap, so readers never observe a half-built pass.

pub mod engine;
pub mod integration;
pub mod lifecycle;
pub mod model;
pub mod store;

pub use engine::{
    CollectionSummary, GroupDiscovery, GroupRegistry, LogicRuleCollector, RulesCollectedNotifier,
    RulesCollectedSink,
};
pub use integration::RuleResolver;
pub use lifecycle::{LifecycleBinder, LifecycleHub};
pub use model::{
    ExecutionContextGroup, GroupContract, RegisteredGroup, ResolvedRule, RuleGroup,
    TemplateContextGroup, ViewContextGroup,
};
pub use store::{InMemoryTypeCatalog, RuleRegistry};
