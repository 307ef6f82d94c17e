// src/infrastructure/wordpress.rs
use crate::application::ports::site_client::{SiteResponse, TargetSiteClient, TransportError};
use crate::domain::publishing::{PostPayload, PublishTarget, SiteUrl};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::{Client, RequestBuilder, Response, header::AUTHORIZATION};
use std::{error::Error as _, time::Duration};

pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
pub const DISCOVERY_PATH: &str = "/wp-json";
pub const CURRENT_USER_PATH: &str = "/wp-json/wp/v2/users/me";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP behaviour for calls to target sites. Built once from configuration
/// and passed to the client; never changed at runtime.
#[derive(Debug, Clone)]
pub struct TargetClientSettings {
    pub timeout: Duration,
    /// Target sites are frequently self-hosted with self-signed or expired
    /// certificates, so validation is off unless configured otherwise.
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Default for TargetClientSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            user_agent: concat!("contentcast/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// WordPress REST API client using HTTP Basic authentication (application
/// passwords).
#[derive(Clone)]
pub struct WordPressClient {
    http: Client,
}

impl WordPressClient {
    pub fn new(settings: &TargetClientSettings) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(Self { http })
    }

    fn authorized(&self, builder: RequestBuilder, target: &PublishTarget) -> RequestBuilder {
        builder.header(AUTHORIZATION, basic_authorization(target))
    }
}

#[async_trait]
impl TargetSiteClient for WordPressClient {
    async fn create_post(
        &self,
        target: &PublishTarget,
        post: &PostPayload,
    ) -> Result<SiteResponse, TransportError> {
        let url = target.site().endpoint(POSTS_PATH);
        let request = self.authorized(self.http.post(url), target).json(post);
        send(request).await
    }

    async fn discover(&self, site: &SiteUrl) -> Result<SiteResponse, TransportError> {
        send(self.http.get(site.endpoint(DISCOVERY_PATH))).await
    }

    async fn current_user(&self, target: &PublishTarget) -> Result<SiteResponse, TransportError> {
        let url = target.site().endpoint(CURRENT_USER_PATH);
        send(self.authorized(self.http.get(url), target)).await
    }
}

/// `Basic base64(username:password)`.
pub fn basic_authorization(target: &PublishTarget) -> String {
    let pair = format!(
        "{}:{}",
        target.username().as_str(),
        target.password().expose()
    );
    format!("Basic {}", STANDARD.encode(pair))
}

async fn send(request: RequestBuilder) -> Result<SiteResponse, TransportError> {
    let response = request.send().await.map_err(map_transport)?;
    read_response(response).await
}

async fn read_response(response: Response) -> Result<SiteResponse, TransportError> {
    let status = response.status();
    let body = response.text().await.map_err(map_transport)?;
    Ok(SiteResponse::new(
        status.as_u16(),
        status.canonical_reason().map(str::to_string),
        body,
    ))
}

fn map_transport(err: reqwest::Error) -> TransportError {
    let message = error_chain(&err);
    if err.is_timeout() {
        TransportError::Timeout(message)
    } else if err.is_connect() {
        TransportError::Connect(message)
    } else {
        TransportError::Other(message)
    }
}

/// reqwest's `Display` hides the underlying cause (DNS, refused, TLS).
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_encodes_user_and_password() {
        let target = PublishTarget::new("https://a.example", "editor", "pass word 123").unwrap();
        // base64("editor:pass word 123")
        assert_eq!(
            basic_authorization(&target),
            "Basic ZWRpdG9yOnBhc3Mgd29yZCAxMjM="
        );
    }

    #[test]
    fn default_settings_use_thirty_second_timeout() {
        let settings = TargetClientSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert!(settings.accept_invalid_certs);
        assert!(settings.user_agent.starts_with("contentcast/"));
    }
}
