//! In-process lifecycle event hub.

use dashmap::DashMap;
use logic_core::error::{LifecycleError, Result};
use logic_core::id::SubscriptionId;
use logic_core::traits::{ApplicationHandle, LifecycleHandler};
use logic_core::types::LifecycleEvent;
use tracing::warn;

/// Dispatches lifecycle events to subscribed handlers.
#[derive(Default)]
pub struct LifecycleHub {
    handlers: DashMap<LifecycleEvent, Vec<(SubscriptionId, LifecycleHandler)>>,
}

impl LifecycleHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers subscribed to `event`.
    pub fn handler_count(&self, event: LifecycleEvent) -> usize {
        self.handlers.get(&event).map(|h| h.len()).unwrap_or(0)
    }

    /// Fire `event`, invoking its handlers in subscription order.
    ///
    /// Stops at the first failing handler and returns its error.
    pub fn raise(&self, event: LifecycleEvent) -> Result<()> {
        // Handlers may unsubscribe themselves, so never hold the map entry
        // while invoking them.
        let handlers: Vec<LifecycleHandler> = self
            .handlers
            .get(&event)
            .map(|entry| entry.iter().map(|(_, handler)| handler.clone()).collect())
            .unwrap_or_default();

        for handler in handlers {
            if let Err(e) = handler() {
                warn!(%event, error = %e, "Lifecycle handler failed");
                return Err(LifecycleError::Handler {
                    event,
                    source: Box::new(e),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl ApplicationHandle for LifecycleHub {
    fn subscribe(&self, event: LifecycleEvent, handler: LifecycleHandler) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers.entry(event).or_default().push((id, handler));
        id
    }

    fn unsubscribe(&self, event: LifecycleEvent, id: SubscriptionId) -> bool {
        match self.handlers.get_mut(&event) {
            Some(mut entry) => {
                let before = entry.len();
                entry.retain(|(existing, _)| *existing != id);
                entry.len() != before
            }
            None => false,
        }
    }
}
