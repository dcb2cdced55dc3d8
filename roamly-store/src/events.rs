use parking_lot::RwLock;
use roamly_core::SignalBus;
use roamly_shared::StoreSignal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

pub type Listener = Arc<dyn Fn(StoreSignal) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    signal: StoreSignal,
    listener: Listener,
}

/// Synchronous in-process broadcast of store signals.
///
/// `emit` runs every matching listener before returning, so a listener that
/// re-reads a store observes the write that triggered it. Listeners run
/// outside the registry lock and may subscribe, unsubscribe or write.
#[derive(Default)]
pub struct InProcessBus {
    subscriptions: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl InProcessBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, signal: StoreSignal, listener: F) -> SubscriptionId
    where
        F: Fn(StoreSignal) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions.write().push(Subscription {
            id,
            signal,
            listener: Arc::new(listener),
        });
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        subscriptions.len() != before
    }

    pub fn subscriber_count(&self, signal: StoreSignal) -> usize {
        self.subscriptions.read().iter().filter(|s| s.signal == signal).count()
    }
}

impl SignalBus for InProcessBus {
    fn emit(&self, signal: StoreSignal) {
        let listeners: Vec<Listener> = self
            .subscriptions
            .read()
            .iter()
            .filter(|s| s.signal == signal)
            .map(|s| s.listener.clone())
            .collect();

        debug!("Broadcasting {} to {} listeners", signal, listeners.len());
        for listener in listeners {
            listener(signal);
        }
    }
}
