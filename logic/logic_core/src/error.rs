//! Error types for the logic rule engine.
//!
//! The root error type, `Error`, wraps the subsystem-specific errors so a
//! caller of a collection pass can handle every failure uniformly.

use crate::id::TypeName;
use crate::types::LifecycleEvent;
use thiserror::Error;

/// Root error type for the rule engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Rule group or collector configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Errors raised by the principal provider
    #[error("Principal error: {0}")]
    Principal(#[from] PrincipalError),

    /// Errors raised while handling a lifecycle event
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors caused by inconsistent rule configuration.
///
/// These are fatal to the collection pass that hits them.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A rule group implements a contract that carries no rule-type marker
    #[error("Rule group '{group}' declares no governing rule type")]
    MissingRuleType {
        /// Name of the offending group
        group: String,
    },

    /// A permission-derived rule has a class that no known group governs
    #[error("No known rule group governs rule class {class}")]
    UnknownRuleClass {
        /// Concrete class of the permission
        class: TypeName,
    },

    /// Collector configuration could not be parsed or is inconsistent
    #[error("Invalid collector configuration: {0}")]
    Invalid(String),
}

/// Errors related to the authenticated principal.
#[derive(Debug, Error)]
pub enum PrincipalError {
    /// The security backend failed to reload the principal's permissions
    #[error("Permission reload failed: {0}")]
    ReloadFailed(String),
}

/// Errors raised while dispatching lifecycle events.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A subscribed handler failed
    #[error("Handler for {event} failed: {source}")]
    Handler {
        /// The event being dispatched
        event: LifecycleEvent,

        /// The error the handler returned
        #[source]
        source: Box<Error>,
    },
}

/// Result type for rule engine operations.
pub type Result<T> = std::result::Result<T, Error>;
