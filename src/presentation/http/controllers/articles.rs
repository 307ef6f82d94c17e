// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleHtmlDto, ArticlePageDto, PlatformStatDto},
    queries::articles::{
        DEFAULT_PER_PAGE, GetArticleByIdQuery, ListArticlesQuery, RenderArticleQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub heading: String,
    /// Markdown source.
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, newest first.", body = ArticlePageDto),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created as a draft.", body = ArticleDto),
        (status = 400, description = "Invalid heading or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid API token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        heading: payload.heading,
        body: payload.body,
    };
    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its platform links.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Body replaced.", body = ArticleDto),
        (status = 400, description = "Invalid body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            body: payload.body,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article and its platform links removed."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/html",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Body rendered the way it is sent to targets.", body = ArticleHtmlDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn render_article(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleHtmlDto>> {
    state
        .services
        .article_queries
        .render_article(RenderArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/platforms/stats",
    responses(
        (status = 200, description = "Distinct articles published per platform.", body = [PlatformStatDto])
    ),
    tag = "Publishing"
)]
pub async fn platform_stats(
    Extension(state): Extension<HttpState>,
    _client: Authenticated,
) -> HttpResult<Json<Vec<PlatformStatDto>>> {
    state
        .services
        .article_queries
        .platform_stats()
        .await
        .into_http()
        .map(Json)
}
