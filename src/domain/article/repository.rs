// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticlePage, NewArticle};
use crate::domain::article::value_objects::{ArticleBody, ArticleId, PublishStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update_body(
        &self,
        id: ArticleId,
        body: ArticleBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article>;
    /// Unconditional overwrite; concurrent writers race and the last one wins.
    async fn set_publish_status(
        &self,
        id: ArticleId,
        status: PublishStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// `page` is 1-based.
    async fn list_page(&self, page: u32, per_page: u32) -> DomainResult<ArticlePage>;
}
