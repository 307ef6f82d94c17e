// src/application/ports/site_client.rs
use crate::domain::publishing::{PostPayload, PublishTarget, SiteUrl};
use async_trait::async_trait;
use thiserror::Error;

pub const STATUS_UNAUTHORIZED: u16 = 401;

/// Status and body of a completed HTTP exchange with a target site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl SiteResponse {
    pub fn new(status: u16, reason: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The response body, or the status line when the body is blank.
    pub fn failure_detail(&self) -> String {
        if self.body.trim().is_empty() {
            self.status_line()
        } else {
            self.body.clone()
        }
    }

    pub fn status_line(&self) -> String {
        match &self.reason {
            Some(reason) => format!("HTTP {} {reason}", self.status),
            None => format!("HTTP {}", self.status),
        }
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("transport failure: {0}")]
    Other(String),
}

/// Calls against a remote content-management site. Implementations hold no
/// session state; every call carries its own credentials.
#[async_trait]
pub trait TargetSiteClient: Send + Sync {
    /// Authenticated create-post call.
    async fn create_post(
        &self,
        target: &PublishTarget,
        post: &PostPayload,
    ) -> Result<SiteResponse, TransportError>;

    /// Unauthenticated reachability probe of the site's API index.
    async fn discover(&self, site: &SiteUrl) -> Result<SiteResponse, TransportError>;

    /// Authenticated lookup of the user owning the credentials.
    async fn current_user(&self, target: &PublishTarget) -> Result<SiteResponse, TransportError>;
}
