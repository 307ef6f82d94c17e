// src/domain/platform/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::platform::value_objects::{Platform, PlatformId};
use chrono::{DateTime, Utc};

/// Records that an article was posted to a platform at `post_url`.
#[derive(Debug, Clone)]
pub struct PlatformLink {
    pub id: i64,
    pub article_id: ArticleId,
    pub platform_id: PlatformId,
    pub platform: Platform,
    pub post_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPlatformLink {
    pub article_id: ArticleId,
    pub platform_id: PlatformId,
    pub post_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformStat {
    pub platform: Platform,
    pub article_count: u64,
}
