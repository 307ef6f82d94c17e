// src/presentation/http/controllers/publishing.rs
use crate::application::{
    commands::publishing::{PublishToManyCommand, TargetCredentials, VerifyTargetCommand},
    dto::{PublishSummaryDto, VerifyTargetDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use std::fmt;
use utoipa::ToSchema;

/// One WordPress site and the account used to post to it.
#[derive(Deserialize, ToSchema)]
pub struct SiteCredentialsRequest {
    pub url: String,
    pub username: String,
    /// Application password. Never logged or echoed back.
    pub password: String,
}

impl fmt::Debug for SiteCredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteCredentialsRequest")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl From<SiteCredentialsRequest> for TargetCredentials {
    fn from(request: SiteCredentialsRequest) -> Self {
        Self {
            url: request.url,
            username: request.username,
            password: request.password,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub article_id: i64,
    pub sites: Vec<SiteCredentialsRequest>,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/publish",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Every site was attempted; see per-site results.", body = PublishSummaryDto),
        (status = 400, description = "Malformed site entry or article id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Publishing"
)]
pub async fn publish_to_sites(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PublishSummaryDto>> {
    let command = PublishToManyCommand {
        article_id: payload.article_id,
        targets: payload.sites.into_iter().map(Into::into).collect(),
    };
    state
        .services
        .publishing
        .publish_to_many(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/verify-site",
    request_body = SiteCredentialsRequest,
    responses(
        (status = 200, description = "Verification outcome; `valid` is false for rejected credentials.", body = VerifyTargetDto),
        (status = 400, description = "Malformed url, username or password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Publishing"
)]
pub async fn verify_site(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Json(payload): Json<SiteCredentialsRequest>,
) -> HttpResult<Json<VerifyTargetDto>> {
    state
        .services
        .publishing
        .verify_target(VerifyTargetCommand {
            credentials: payload.into(),
        })
        .await
        .into_http()
        .map(Json)
}
