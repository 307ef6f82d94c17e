// tests/support/mocks/platform_repos.rs
use async_trait::async_trait;
use contentcast::domain::article::ArticleId;
use contentcast::domain::errors::{DomainError, DomainResult};
use contentcast::domain::platform::{
    NewPlatformLink, Platform, PlatformId, PlatformLink, PlatformLinkRepository,
    PlatformRepository, PlatformStat,
};
use std::collections::HashSet;
use std::sync::Mutex;

/// `post_platforms` and `article_platforms` in memory. Both ports live on
/// one struct because stats read links.
#[derive(Default)]
pub struct InMemoryPlatformStore {
    platforms: Mutex<Vec<(PlatformId, Platform)>>,
    links: Mutex<Vec<PlatformLink>>,
}

impl InMemoryPlatformStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> Vec<PlatformLink> {
        self.links.lock().unwrap().clone()
    }

    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn platform_count(&self) -> usize {
        self.platforms.lock().unwrap().len()
    }
}

#[async_trait]
impl PlatformRepository for InMemoryPlatformStore {
    async fn get_or_create(&self, platform: Platform) -> DomainResult<PlatformId> {
        let mut platforms = self.platforms.lock().unwrap();
        if let Some((id, _)) = platforms.iter().find(|(_, p)| *p == platform) {
            return Ok(*id);
        }
        let id = PlatformId::new(platforms.len() as i64 + 1)?;
        platforms.push((id, platform));
        Ok(id)
    }

    async fn stats(&self) -> DomainResult<Vec<PlatformStat>> {
        let platforms = self.platforms.lock().unwrap().clone();
        let links = self.links.lock().unwrap();
        Ok(platforms
            .into_iter()
            .map(|(id, platform)| {
                let articles: HashSet<i64> = links
                    .iter()
                    .filter(|l| l.platform_id == id)
                    .map(|l| i64::from(l.article_id))
                    .collect();
                PlatformStat {
                    platform,
                    article_count: articles.len() as u64,
                }
            })
            .collect())
    }
}

#[async_trait]
impl PlatformLinkRepository for InMemoryPlatformStore {
    async fn insert(&self, link: NewPlatformLink) -> DomainResult<PlatformLink> {
        let platform = self
            .platforms
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == link.platform_id)
            .map(|(_, p)| *p)
            .ok_or_else(|| DomainError::not_found("platform"))?;

        let mut links = self.links.lock().unwrap();
        let created = PlatformLink {
            id: links.len() as i64 + 1,
            article_id: link.article_id,
            platform_id: link.platform_id,
            platform,
            post_url: link.post_url,
            created_at: link.created_at,
        };
        links.push(created.clone());
        Ok(created)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<PlatformLink>> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.article_id == article_id)
            .cloned()
            .collect())
    }
}

/// Link repository whose writes always fail, for the remote-succeeded but
/// local-write-failed path.
pub struct FailingLinkRepo;

#[async_trait]
impl PlatformLinkRepository for FailingLinkRepo {
    async fn insert(&self, _link: NewPlatformLink) -> DomainResult<PlatformLink> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn list_by_article(&self, _article_id: ArticleId) -> DomainResult<Vec<PlatformLink>> {
        Ok(Vec::new())
    }
}
