//! Lifecycle events that trigger a collection pass.

use std::fmt;

/// An application lifecycle event the engine can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// A principal logged on.
    LoggedOn,

    /// Application setup completed.
    SetupComplete,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOn => write!(f, "logged-on"),
            Self::SetupComplete => write!(f, "setup-complete"),
        }
    }
}

/// What caused a collection pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectTrigger {
    /// A principal logged on.
    LoggedOn,

    /// Application setup completed.
    SetupComplete,

    /// The embedding application asked for a rebuild directly.
    Manual,
}

impl From<LifecycleEvent> for CollectTrigger {
    fn from(event: LifecycleEvent) -> Self {
        match event {
            LifecycleEvent::LoggedOn => Self::LoggedOn,
            LifecycleEvent::SetupComplete => Self::SetupComplete,
        }
    }
}

impl fmt::Display for CollectTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOn => write!(f, "logged-on"),
            Self::SetupComplete => write!(f, "setup-complete"),
            Self::Manual => write!(f, "manual"),
        }
    }
}
