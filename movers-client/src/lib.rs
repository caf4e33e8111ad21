//! # movers-client
//!
//! Async client for the remote profile API and the service that keeps the
//! session cache in sync with it. Every request is a single attempt; a
//! failure is surfaced to the caller and the local cache is left untouched.

pub mod client;
pub mod error;
pub mod service;

pub use client::{ProfileClient, ProfileUpdate, SaveReceipt};
pub use error::ClientError;
pub use service::ProfileService;
