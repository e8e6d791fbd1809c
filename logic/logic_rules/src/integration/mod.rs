//! Rule-group integration.
//!
//! This module turns raw context rules into resolved rules using the
//! bindings of the group that owns them.

mod resolver;

pub use resolver::RuleResolver;
