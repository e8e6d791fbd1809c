//! Rule storage.
//!
//! This module provides the rule registry that collection passes publish
//! into, and an in-memory type catalog.

mod catalog;
mod registry;

pub use catalog::InMemoryTypeCatalog;
pub(crate) use registry::StagedRules;
pub use registry::{RuleMap, RuleRegistry};
