//! Profile API error taxonomy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Profile API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The API answered but refused the operation; carries the server's
    /// human-readable message when one was provided.
    #[error("Profile API error: {0}")]
    Api(String),

    #[error("No session credential; log in before syncing the profile")]
    NotLoggedIn,
}
