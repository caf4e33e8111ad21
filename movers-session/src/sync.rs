//! Auth-state synchronization for UI consumers.
//!
//! Mirrors the hook that keeps independently mounted components (navigation,
//! route guards) consistent: the current auth state is cached, re-evaluated
//! on every bus emission, and re-checked on window focus / visibility
//! changes to catch credential changes the bus cannot see, such as another
//! tab or external storage clearing.

use crate::events::{AuthEvents, Subscription};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-environment signals that trigger a re-check outside bus emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Focus,
    VisibilityChange,
}

pub struct AuthSync {
    events: AuthEvents,
    state: Arc<AtomicBool>,
    subscription: Subscription,
}

impl AuthSync {
    pub fn new(events: AuthEvents) -> Self {
        let state = Arc::new(AtomicBool::new(events.is_authenticated()));
        let listener_events = events.clone();
        let listener_state = Arc::clone(&state);
        let subscription = events.subscribe(move || {
            listener_state.store(listener_events.is_authenticated(), Ordering::SeqCst);
        });
        Self {
            events,
            state,
            subscription,
        }
    }

    /// Last observed authentication state.
    pub fn is_authenticated(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    /// Re-evaluate on a host signal the bus does not cover.
    pub fn notify(&self, _event: WindowEvent) {
        self.state
            .store(self.events.is_authenticated(), Ordering::SeqCst);
    }

    /// Stop tracking bus emissions. Idempotent.
    pub fn detach(&self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::store::{keys, MemoryStore, SessionStore};

    #[test]
    fn tracks_login_and_logout_through_the_bus() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let sync = AuthSync::new(session.events().clone());
        assert!(!sync.is_authenticated());

        session.login("builder@example.com");
        assert!(sync.is_authenticated());

        session.logout();
        assert!(!sync.is_authenticated());
    }

    #[test]
    fn focus_recheck_catches_external_changes() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(store.clone());
        let sync = AuthSync::new(session.events().clone());

        // Another tab sets the credential without emitting on this bus.
        store.set(keys::USER_EMAIL, "builder@example.com");
        assert!(!sync.is_authenticated());

        sync.notify(WindowEvent::Focus);
        assert!(sync.is_authenticated());

        store.remove(keys::USER_EMAIL);
        sync.notify(WindowEvent::VisibilityChange);
        assert!(!sync.is_authenticated());
    }

    #[test]
    fn detach_stops_tracking() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let sync = AuthSync::new(session.events().clone());

        sync.detach();
        sync.detach();
        session.login("builder@example.com");
        assert!(!sync.is_authenticated());
    }

    #[test]
    fn detached_environment_reports_logged_out() {
        let sync = AuthSync::new(AuthEvents::detached());
        assert!(!sync.is_authenticated());
        sync.notify(WindowEvent::Focus);
        assert!(!sync.is_authenticated());
    }
}
