//! Keeps the session profile cache in sync with the remote API.
//!
//! The cache is only ever replaced wholesale after a successful remote read
//! or write; on any failure the previous snapshot stays in place so the
//! caller can retry.

use crate::client::{ProfileClient, ProfileUpdate};
use crate::error::ClientError;
use movers_session::{Session, UserProfile};

pub struct ProfileService {
    client: ProfileClient,
    session: Session,
}

impl ProfileService {
    pub fn new(client: ProfileClient, session: Session) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the remote profile and replace the cached snapshot.
    pub async fn refresh(&self) -> Result<UserProfile, ClientError> {
        let email = self.session.email().ok_or(ClientError::NotLoggedIn)?;
        let profile = self.client.fetch_profile(&email).await?;
        self.session.store_profile(&profile);
        if let Some(role) = profile.role {
            self.session.set_role(role);
        }
        Ok(profile)
    }

    /// Save an edit. The submitted fields plus the server-owned `updatedAt`
    /// and `role` become the new snapshot; the previously known role is kept
    /// when the server does not return one.
    pub async fn save(&self, update: ProfileUpdate) -> Result<UserProfile, ClientError> {
        let receipt = self.client.save_profile(&update).await?;

        let cached_role = self
            .session
            .load_profile()
            .and_then(|profile| profile.role)
            .or_else(|| self.session.role());

        let profile = update.into_profile(receipt.role.or(cached_role), receipt.updated_at);
        self.session.store_profile(&profile);
        if let Some(role) = profile.role {
            self.session.set_role(role);
        }
        Ok(profile)
    }
}
