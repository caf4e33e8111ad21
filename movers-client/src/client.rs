//! HTTP client for the remote profile API.

use crate::error::ClientError;
use movers_session::{Role, UserProfile};
use serde::{Deserialize, Serialize};

/// Message used when a failed save carries no server error string.
const SAVE_FAILED: &str = "Unable to update the profile.";

/// Thin reqwest wrapper over the profile endpoints. One attempt per call,
/// no retry.
#[derive(Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /profile?email=...`.
    ///
    /// A non-2xx status is a recoverable failure; missing or oddly-typed
    /// `role` values coerce to no role instead of failing the read.
    pub async fn fetch_profile(&self, email: &str) -> Result<UserProfile, ClientError> {
        tracing::debug!("Fetching profile for {}", email);
        let response = self
            .http
            .get(format!("{}/profile", self.base_url))
            .query(&[("email", email)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let envelope: ProfileEnvelope = response.json().await?;
        Ok(envelope.profile.unwrap_or_default().into_profile(email))
    }

    /// `POST /profile` with a JSON body of profile fields, `role` excluded.
    ///
    /// A non-2xx status or an `ok: false` body is a failure carrying the
    /// server's `error` message when present. An unreadable body is treated
    /// as an empty one.
    pub async fn save_profile(&self, update: &ProfileUpdate) -> Result<SaveReceipt, ClientError> {
        tracing::debug!("Saving profile for {}", update.email);
        let response = self
            .http
            .post(format!("{}/profile", self.base_url))
            .json(update)
            .send()
            .await?;

        let status = response.status();
        let body: SaveResponse = response.json().await.unwrap_or_default();

        if !status.is_success() || body.ok == Some(false) {
            return Err(ClientError::Api(
                body.error.unwrap_or_else(|| SAVE_FAILED.to_string()),
            ));
        }

        let raw = body.profile.unwrap_or_default();
        Ok(SaveReceipt {
            updated_at: raw.updated_at,
            role: raw.role.as_deref().and_then(Role::parse),
        })
    }
}

/// Editable profile fields. Serializes to the POST body; `role` is
/// deliberately absent because the server owns it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub location: String,
    pub socials: String,
    pub github: String,
    pub skills: Vec<String>,
}

impl ProfileUpdate {
    /// Start an edit from the current snapshot, dropping the role.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            email: profile.email.clone(),
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            display_name: profile.display_name.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            socials: profile.socials.clone(),
            github: profile.github.clone(),
            skills: profile.skills.clone(),
        }
    }

    /// Materialize the snapshot a successful save produces.
    pub fn into_profile(self, role: Option<Role>, updated_at: Option<String>) -> UserProfile {
        UserProfile {
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            display_name: self.display_name,
            bio: self.bio,
            location: self.location,
            socials: self.socials,
            github: self.github,
            skills: self.skills,
            role,
            updated_at,
        }
    }
}

/// The server's answer to a successful save: fields only it controls.
#[derive(Debug, Clone)]
pub struct SaveReceipt {
    pub updated_at: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileEnvelope {
    #[serde(default)]
    profile: Option<RawProfile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProfile {
    username: String,
    first_name: String,
    last_name: String,
    display_name: String,
    bio: String,
    location: String,
    socials: String,
    github: String,
    skills: Vec<String>,
    role: Option<String>,
    updated_at: Option<String>,
}

impl RawProfile {
    fn into_profile(self, email: &str) -> UserProfile {
        UserProfile {
            email: email.to_string(),
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            display_name: self.display_name,
            bio: self.bio,
            location: self.location,
            socials: self.socials,
            github: self.github,
            skills: self.skills,
            role: self.role.as_deref().and_then(Role::parse),
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SaveResponse {
    ok: Option<bool>,
    profile: Option<RawProfile>,
    error: Option<String>,
}
