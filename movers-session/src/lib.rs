//! # movers-session
//!
//! Tab-scoped session state for the First Movers community platform: a
//! narrow key/value storage contract, the auth-change notification bus that
//! keeps independently mounted consumers consistent, and the cached
//! user-profile snapshot.

pub mod events;
pub mod profile;
pub mod session;
pub mod store;
pub mod sync;

pub use events::{AuthEvents, Subscription};
pub use profile::{parse_skills, Role, UserProfile};
pub use session::Session;
pub use store::{keys, MemoryStore, SessionStore};
pub use sync::{AuthSync, WindowEvent};
