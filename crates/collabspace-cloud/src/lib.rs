//! Collabspace backend client.
//!
//! The editor core (`collabspace-core`) never talks to the backend itself;
//! this crate adds the thin client surface the workspace front end needs:
//! password sign-in, one-time-password confirmation, stored credentials, and
//! collab-space metadata.

pub mod auth;
pub mod client;
pub mod space;
pub mod validate;

pub use auth::{AuthSession, StoredCredentials};
pub use client::BackendClient;
pub use space::CollabSpace;

/// Backend base URL.
/// Override with COLLABSPACE_BACKEND_URL for self-hosted deployments.
pub fn backend_api_url() -> String {
    std::env::var("COLLABSPACE_BACKEND_URL")
        .unwrap_or_else(|_| collabspace_core::constants::endpoints::BACKEND_BASE_URL.to_string())
}
