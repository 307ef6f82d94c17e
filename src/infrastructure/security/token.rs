// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedClient,
    error::{ApplicationError, ApplicationResult},
    ports::security::AccessTokenVerifier,
};

/// Accepts a single pre-shared API token. Only the blake3 digest of the
/// token is kept; `blake3::Hash` compares in constant time.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    digest: blake3::Hash,
    label: String,
}

impl StaticTokenVerifier {
    pub fn new(token: &str, label: impl Into<String>) -> Self {
        Self {
            digest: blake3::hash(token.as_bytes()),
            label: label.into(),
        }
    }
}

impl AccessTokenVerifier for StaticTokenVerifier {
    fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedClient> {
        if token.is_empty() || blake3::hash(token.as_bytes()) != self.digest {
            return Err(ApplicationError::unauthorized("invalid access token"));
        }
        Ok(AuthenticatedClient {
            label: self.label.clone(),
        })
    }
}
