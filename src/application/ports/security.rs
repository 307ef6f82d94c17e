// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AuthenticatedClient};

/// Checks bearer tokens presented to the HTTP API.
pub trait AccessTokenVerifier: Send + Sync {
    fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedClient>;
}
