//! Binding collection passes to lifecycle events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use logic_core::id::SubscriptionId;
use logic_core::traits::{ApplicationHandle, LifecycleHandler};
use logic_core::types::{CollectTrigger, LifecycleEvent};
use tracing::debug;

use crate::engine::LogicRuleCollector;

/// Runs a collection pass whenever a principal logs on, and once when
/// application setup completes.
pub struct LifecycleBinder {
    collector: Arc<LogicRuleCollector>,
}

impl LifecycleBinder {
    pub fn new(collector: Arc<LogicRuleCollector>) -> Self {
        Self { collector }
    }

    /// Subscribe the collector to `application`'s lifecycle events.
    ///
    /// The setup-complete handler removes itself the first time it fires.
    pub fn attach(&self, application: &Arc<dyn ApplicationHandle>) {
        let collector = Arc::clone(&self.collector);
        let on_logged_on: LifecycleHandler = Arc::new(move || {
            collector.collect(CollectTrigger::LoggedOn).map(|_| ())
        });
        application.subscribe(LifecycleEvent::LoggedOn, on_logged_on);

        let collector = Arc::clone(&self.collector);
        let weak_application = Arc::downgrade(application);
        let own_id: Arc<OnceLock<SubscriptionId>> = Arc::new(OnceLock::new());
        let fired = Arc::new(AtomicBool::new(false));

        let handler_id = Arc::clone(&own_id);
        let on_setup_complete: LifecycleHandler = Arc::new(move || {
            if fired.swap(true, Ordering::AcqRel) {
                return Ok(());
            }
            if let (Some(application), Some(id)) = (weak_application.upgrade(), handler_id.get()) {
                application.unsubscribe(LifecycleEvent::SetupComplete, *id);
                debug!("Detached setup-complete rule collection");
            }
            collector.collect(CollectTrigger::SetupComplete).map(|_| ())
        });

        let id = application.subscribe(LifecycleEvent::SetupComplete, on_setup_complete);
        let _ = own_id.set(id);
    }
}
