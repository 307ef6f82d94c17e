// src/domain/platform/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::platform::entity::{NewPlatformLink, PlatformLink, PlatformStat};
use crate::domain::platform::value_objects::{Platform, PlatformId};
use async_trait::async_trait;

#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn get_or_create(&self, platform: Platform) -> DomainResult<PlatformId>;
    /// Distinct linked articles per platform, including platforms without links.
    async fn stats(&self) -> DomainResult<Vec<PlatformStat>>;
}

#[async_trait]
pub trait PlatformLinkRepository: Send + Sync {
    async fn insert(&self, link: NewPlatformLink) -> DomainResult<PlatformLink>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<PlatformLink>>;
}
