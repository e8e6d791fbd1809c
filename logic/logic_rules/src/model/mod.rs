//! Rule models.
//!
//! This module defines rule groups, their context bindings, and the
//! resolved rules a collection pass produces.

pub mod group;
pub mod resolved;

pub use group::{
    ExecutionContextGroup, GroupContract, RegisteredGroup, RuleGroup, TemplateContextGroup,
    ViewContextGroup,
};
pub use logic_core::types::ContextRule;
pub use resolved::ResolvedRule;
