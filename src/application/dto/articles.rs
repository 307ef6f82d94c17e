use crate::domain::article::Article;
use crate::domain::platform::{PlatformLink, PlatformStat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformLinkDto {
    pub id: i64,
    pub platform_name: String,
    pub post_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<PlatformLink> for PlatformLinkDto {
    fn from(link: PlatformLink) -> Self {
        Self {
            id: link.id,
            platform_name: link.platform.as_str().to_string(),
            post_url: link.post_url,
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub heading: String,
    pub body: String,
    /// `Draft`, `Success` or `Failed`.
    pub publish_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub platforms: Vec<PlatformLinkDto>,
}

impl ArticleDto {
    pub fn with_links(article: Article, links: Vec<PlatformLink>) -> Self {
        let mut dto = Self::from(article);
        dto.platforms = links.into_iter().map(Into::into).collect();
        dto
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            heading: article.heading.into(),
            body: article.body.into(),
            publish_status: article.publish_status.as_str().to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            platforms: Vec::new(),
        }
    }
}

/// Page-numbered listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlePageDto {
    pub data: Vec<ArticleDto>,
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleHtmlDto {
    pub title: String,
    pub html_content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformStatDto {
    pub platform_name: String,
    pub article_count: u64,
}

impl From<PlatformStat> for PlatformStatDto {
    fn from(stat: PlatformStat) -> Self {
        Self {
            platform_name: stat.platform.as_str().to_string(),
            article_count: stat.article_count,
        }
    }
}
