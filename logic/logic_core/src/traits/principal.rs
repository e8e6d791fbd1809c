//! The authenticated principal and its permissions.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::id::TypeName;
use crate::types::{ContextRule, SecurityBackendKind};

/// A permission object granted to a principal.
///
/// Only permissions that expose a context rule take part in rule
/// collection; the others are ignored by the engine.
pub trait Permission: Send + Sync + fmt::Debug {
    /// The concrete class of this permission.
    fn class(&self) -> &TypeName;

    /// The context rule this permission carries, if it is a rule permission.
    fn as_context_rule(&self) -> Option<&ContextRule> {
        None
    }
}

/// A role aggregating permissions.
pub trait Role: Send + Sync {
    /// The role's name.
    fn name(&self) -> &str;

    /// Permissions granted through this role.
    fn permissions(&self) -> Vec<Arc<dyn Permission>>;
}

/// The currently authenticated actor.
///
/// A principal exposes either an explicit permission list or a set of roles
/// whose permissions are aggregated. When it exposes neither, it holds no
/// rule permissions.
pub trait Principal: Send + Sync {
    /// The principal's user name.
    fn name(&self) -> &str;

    /// Explicitly granted permissions, if this principal carries them directly.
    fn granted_permissions(&self) -> Option<Vec<Arc<dyn Permission>>> {
        None
    }

    /// Roles held by this principal, if permissions are role-aggregated.
    fn roles(&self) -> Option<Vec<Arc<dyn Role>>> {
        None
    }
}

/// Supplies the current principal from the security backend.
pub trait PrincipalProvider: Send + Sync {
    /// The kind of backend in use.
    fn backend_kind(&self) -> SecurityBackendKind;

    /// The currently authenticated principal, if any.
    fn current_principal(&self) -> Option<Arc<dyn Principal>>;

    /// Force the backend to reload the current principal's permissions.
    fn force_reload_permissions(&self) -> Result<()>;
}
