//! # Logic Core
//!
//! `logic_core` provides the building blocks shared by the logic rule engine:
//! error types, identifiers, the context tags a rule carries, and the traits
//! through which the engine talks to its external collaborators.
//!
//! ## Collaborators
//!
//! The engine does not discover types, authenticate users, or host an
//! application loop itself. Those concerns are supplied from outside through
//! the following seams:
//!
//! - **TypeCatalog**: answers "which types descend from this one".
//! - **PrincipalProvider**: exposes the authenticated principal and its
//!   granted permissions, and can force a permission reload.
//! - **ApplicationHandle**: delivers lifecycle events (login, setup complete).
//!
//! ## Crate Structure
//!
//! - **error**: Error types for the rule engine
//! - **id**: Strongly-typed identifiers and type names
//! - **traits**: Collaborator interfaces
//! - **types**: Context tags, rule declarations and lifecycle events
//! - **utils**: Configuration and logging helpers
//! - **macros**: Logging at a runtime-selected level

pub mod error;
pub mod id;
pub mod macros;
pub mod traits;
pub mod types;
pub mod utils;

#[doc(hidden)]
pub use tracing;

pub use error::{ConfigurationError, Error, LifecycleError, PrincipalError, Result};
pub use id::{GroupId, SubscriptionId, TypeName};
pub use traits::{
    ApplicationHandle, LifecycleHandler, Permission, Principal, PrincipalProvider, Role,
    TypeCatalog,
};
pub use types::{
    CollectTrigger, ContextRule, ExecutionContext, LifecycleEvent, SecurityBackendKind,
    TemplateContext,
};
pub use utils::{CollectorConfig, LogLevel, RuleOrdering};
