//! "Rules collected" notification.

use std::sync::Arc;

use logic_core::id::SubscriptionId;
use parking_lot::RwLock;

/// Receives the "rules collected" event after every successful pass.
///
/// The event carries no payload; receivers re-query the registry.
pub trait RulesCollectedSink: Send + Sync {
    /// Called once per completed collection pass.
    fn rules_collected(&self);
}

/// An observer callback.
pub type RulesCollectedObserver = Arc<dyn Fn() + Send + Sync>;

/// A list of observers notified when rules are collected.
#[derive(Default)]
pub struct RulesCollectedNotifier {
    observers: RwLock<Vec<(SubscriptionId, RulesCollectedObserver)>>,
}

impl RulesCollectedNotifier {
    /// Create a notifier with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Invoke every observer in subscription order.
    pub fn notify(&self) {
        // Observers may (un)subscribe while being notified.
        let observers: Vec<RulesCollectedObserver> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer();
        }
    }
}

impl RulesCollectedSink for RulesCollectedNotifier {
    fn rules_collected(&self) {
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_reaches_all_observers() {
        let notifier = RulesCollectedNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            notifier.subscribe(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        notifier.rules_collected();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe() {
        let notifier = RulesCollectedNotifier::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = notifier.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.observer_count(), 0);
    }

    #[test]
    fn test_observer_can_unsubscribe_itself() {
        let notifier = Arc::new(RulesCollectedNotifier::new());
        let own_id = Arc::new(parking_lot::Mutex::new(None));

        let weak = Arc::downgrade(&notifier);
        let slot = Arc::clone(&own_id);
        let id = notifier.subscribe(move || {
            if let (Some(notifier), Some(id)) = (weak.upgrade(), *slot.lock()) {
                notifier.unsubscribe(id);
            }
        });
        *own_id.lock() = Some(id);

        notifier.notify();
        assert_eq!(notifier.observer_count(), 0);
    }
}
