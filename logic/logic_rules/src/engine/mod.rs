//! Rule collection engine.
//!
//! This module provides the group registry, the collector that rebuilds
//! the rule registry, and the "rules collected" notification.

mod collector;
mod groups;
mod notifier;

pub use collector::{CollectionSummary, GroupDiscovery, GroupSource, LogicRuleCollector};
pub use groups::GroupRegistry;
pub use notifier::{RulesCollectedNotifier, RulesCollectedObserver, RulesCollectedSink};
