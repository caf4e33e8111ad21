//! Session credential and profile-cache accessors.
//!
//! Every credential writer emits the change notification immediately after
//! the storage mutation, in the same synchronous turn.

use crate::events::AuthEvents;
use crate::profile::{Role, UserProfile};
use crate::store::{keys, SessionStore};
use std::sync::Arc;

/// Bundles the session store with its notification bus.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    events: AuthEvents,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let events = AuthEvents::new(Arc::clone(&store));
        Self { store, events }
    }

    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    /// Record a successful login.
    pub fn login(&self, email: &str) {
        self.store.set(keys::USER_EMAIL, email);
        self.events.emit_change();
    }

    /// Destroy the credential, the role and the cached profile.
    pub fn logout(&self) {
        self.store.remove(keys::USER_EMAIL);
        self.store.remove(keys::USER_ROLE);
        self.store.remove(keys::USER_PROFILE);
        self.events.emit_change();
    }

    pub fn is_authenticated(&self) -> bool {
        self.events.is_authenticated()
    }

    pub fn email(&self) -> Option<String> {
        self.store.get(keys::USER_EMAIL)
    }

    /// Role recorded alongside the credential, used when the cached profile
    /// carries none.
    pub fn role(&self) -> Option<Role> {
        self.store.get(keys::USER_ROLE).as_deref().and_then(Role::parse)
    }

    pub fn set_role(&self, role: Role) {
        self.store.set(keys::USER_ROLE, role.as_str());
    }

    /// Replace the cached profile snapshot wholesale.
    pub fn store_profile(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => self.store.set(keys::USER_PROFILE, &json),
            Err(err) => tracing::warn!("Failed to serialize profile cache: {}", err),
        }
    }

    /// Last cached snapshot, if any. A corrupt blob reads as absent.
    pub fn load_profile(&self) -> Option<UserProfile> {
        let json = self.store.get(keys::USER_PROFILE)?;
        match serde_json::from_str(&json) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!("Discarding corrupt profile cache: {}", err);
                None
            }
        }
    }

    pub fn clear_profile(&self) {
        self.store.remove(keys::USER_PROFILE);
    }
}
