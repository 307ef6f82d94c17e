// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticleStore, InMemoryPlatformStore};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use contentcast::application::{
    commands::publishing::TargetCredentials,
    ports::{AccessTokenVerifierPort, TargetSiteClientPort},
    services::ApplicationServices,
};
use contentcast::domain::article::Article;
use contentcast::domain::platform::PlatformLinkRepository;
use contentcast::infrastructure::{
    markdown::ComrakMarkdownRenderer,
    security::token::StaticTokenVerifier,
    wordpress::{TargetClientSettings, WordPressClient},
};
use contentcast::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_TOKEN: &str = "test-api-token-0123456789";
pub const TARGET_TIMEOUT: Duration = Duration::from_secs(2);

/// Services wired to in-memory stores and a real WordPress client.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticleStore>,
    pub platforms: Arc<InMemoryPlatformStore>,
}

impl TestApp {
    pub fn new(articles: impl IntoIterator<Item = Article>) -> Self {
        let platforms = Arc::new(InMemoryPlatformStore::new());
        Self::with_link_repo(articles, Arc::clone(&platforms) as _, platforms)
    }

    /// Same as `new` but links are written through `link_repo`.
    pub fn with_link_repo(
        articles: impl IntoIterator<Item = Article>,
        link_repo: Arc<dyn PlatformLinkRepository>,
        platforms: Arc<InMemoryPlatformStore>,
    ) -> Self {
        let articles = Arc::new(InMemoryArticleStore::with_articles(articles));
        let settings = TargetClientSettings {
            timeout: TARGET_TIMEOUT,
            ..TargetClientSettings::default()
        };
        let site_client: Arc<TargetSiteClientPort> =
            Arc::new(WordPressClient::new(&settings).expect("build http client"));
        let token_verifier: Arc<AccessTokenVerifierPort> =
            Arc::new(StaticTokenVerifier::new(TEST_TOKEN, "test"));

        let services = Arc::new(ApplicationServices::new(
            Arc::clone(&articles) as _,
            Arc::clone(&articles) as _,
            Arc::clone(&platforms) as _,
            link_repo,
            site_client,
            Arc::new(ComrakMarkdownRenderer::new()),
            token_verifier,
            Arc::new(FixedClock),
        ));

        Self {
            services,
            articles,
            platforms,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }
}

pub fn credentials(url: impl Into<String>, username: &str, password: &str) -> TargetCredentials {
    TargetCredentials {
        url: url.into(),
        username: username.into(),
        password: password.into(),
    }
}

/// `127.0.0.1` port with nothing listening on it.
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn authorized_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authorized_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
