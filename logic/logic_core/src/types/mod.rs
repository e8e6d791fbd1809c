//! Common data structures used throughout the rule engine.

pub mod context;
pub mod lifecycle;
pub mod rule;
pub mod security;

pub use context::{ExecutionContext, TemplateContext};
pub use lifecycle::{CollectTrigger, LifecycleEvent};
pub use rule::ContextRule;
pub use security::SecurityBackendKind;
