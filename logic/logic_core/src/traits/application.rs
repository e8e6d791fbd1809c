//! Lifecycle event subscription.

use std::sync::Arc;

use crate::error::Result;
use crate::id::SubscriptionId;
use crate::types::LifecycleEvent;

/// A handler invoked when a lifecycle event fires.
///
/// An error returned by a handler is surfaced to whoever raised the event.
pub type LifecycleHandler = Arc<dyn Fn() -> Result<()> + Send + Sync>;

/// The hosting application's lifecycle event surface.
pub trait ApplicationHandle: Send + Sync {
    /// Subscribe `handler` to `event`.
    fn subscribe(&self, event: LifecycleEvent, handler: LifecycleHandler) -> SubscriptionId;

    /// Remove a subscription. Returns `false` if it was not registered.
    ///
    /// Must be callable from inside a handler for the same event.
    fn unsubscribe(&self, event: LifecycleEvent, id: SubscriptionId) -> bool;
}
