//! Auth-change notification bus.
//!
//! Broadcasts zero-payload "authentication state changed" signals to any
//! number of listeners in the same process, synchronously and in
//! registration order. Any code path that adds or removes the session
//! credential must emit immediately after the storage mutation, in the same
//! synchronous turn, so every subscriber observes a consistent state on its
//! next read.

use crate::store::{keys, SessionStore};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

type Listener = Arc<dyn Fn() + Send + Sync>;

struct Registry {
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl Registry {
    fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

/// Publish/subscribe channel for authentication-state transitions.
#[derive(Clone)]
pub struct AuthEvents {
    registry: Arc<Registry>,
    store: Option<Arc<dyn SessionStore>>,
}

impl AuthEvents {
    /// Bus bound to a session store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            store: Some(store),
        }
    }

    /// Bus with no host environment. Emission and subscription degrade to
    /// no-ops and `is_authenticated` reports `false`; nothing throws.
    pub fn detached() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            store: None,
        }
    }

    /// Broadcast a change notification to every current subscriber,
    /// synchronously, in registration order. The event carries no data;
    /// listeners re-query the session state themselves.
    pub fn emit_change(&self) {
        if self.store.is_none() {
            return;
        }
        // Snapshot before invoking, so a listener registered during delivery
        // is not invoked for this emission and listeners can freely
        // subscribe/unsubscribe from inside a callback.
        let snapshot: Vec<Listener> = self
            .registry
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Register `listener` for every future [`emit_change`](Self::emit_change)
    /// call. Each call is an independent registration, even from the same
    /// caller.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.store.is_none() {
            return Subscription {
                registry: None,
                id: 0,
                active: AtomicBool::new(false),
            };
        }
        let id = self.registry.next_id.fetch_add(1, Ordering::SeqCst);
        self.registry.listeners.lock().push((id, Arc::new(listener)));
        Subscription {
            registry: Some(Arc::clone(&self.registry)),
            id,
            active: AtomicBool::new(true),
        }
    }

    /// True iff a session credential is currently present. Side-effect free.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .as_ref()
            .map(|store| store.get(keys::USER_EMAIL).is_some())
            .unwrap_or(false)
    }
}

/// Handle returned by [`AuthEvents::subscribe`]. Unsubscribing more than once
/// is a no-op; dropping the handle leaves the listener registered.
pub struct Subscription {
    registry: Option<Arc<Registry>>,
    id: u64,
    active: AtomicBool,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(registry) = &self.registry {
            registry.listeners.lock().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn bus() -> (AuthEvents, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (AuthEvents::new(store.clone()), store)
    }

    #[test]
    fn every_listener_fires_once_per_emit_in_registration_order() {
        let (events, _) = bus();
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let log = log.clone();
            events.subscribe(move || log.lock().push("first"))
        };
        let _second = {
            let log = log.clone();
            events.subscribe(move || log.lock().push("second"))
        };

        events.emit_change();
        events.emit_change();
        assert_eq!(*log.lock(), vec!["first", "second", "first", "second"]);

        first.unsubscribe();
        events.emit_change();
        assert_eq!(
            *log.lock(),
            vec!["first", "second", "first", "second", "second"]
        );
    }

    #[test]
    fn unsubscribe_twice_is_a_noop() {
        let (events, _) = bus();
        let count = Arc::new(AtomicU64::new(0));

        let subscription = {
            let count = count.clone();
            events.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        subscription.unsubscribe();
        subscription.unsubscribe();

        events.emit_change();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn same_caller_gets_independent_subscriptions() {
        let (events, _) = bus();
        let count = Arc::new(AtomicU64::new(0));

        let one = {
            let count = count.clone();
            events.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        let _two = {
            let count = count.clone();
            events.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        one.unsubscribe();
        events.emit_change();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_added_during_delivery_waits_for_next_emit() {
        let (events, _) = bus();
        let count = Arc::new(AtomicU64::new(0));

        let outer_events = events.clone();
        let outer_count = count.clone();
        let _outer = events.subscribe(move || {
            let inner_count = outer_count.clone();
            // Registered mid-delivery; must not run for this emission.
            let _inner = outer_events.subscribe(move || {
                inner_count.fetch_add(1, Ordering::SeqCst);
            });
        });

        events.emit_change();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn is_authenticated_tracks_credential_presence() {
        let (events, store) = bus();
        assert!(!events.is_authenticated());

        store.set(keys::USER_EMAIL, "builder@example.com");
        events.emit_change();
        assert!(events.is_authenticated());

        store.remove(keys::USER_EMAIL);
        events.emit_change();
        assert!(!events.is_authenticated());
    }

    #[test]
    fn detached_bus_degrades_to_noops() {
        let events = AuthEvents::detached();
        assert!(!events.is_authenticated());

        let count = Arc::new(AtomicU64::new(0));
        let subscription = {
            let count = count.clone();
            events.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };
        events.emit_change();
        subscription.unsubscribe();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
