// src/infrastructure/repositories/postgres_platform.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::platform::{
    NewPlatformLink, Platform, PlatformId, PlatformLink, PlatformLinkRepository,
    PlatformRepository, PlatformStat,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPlatformRepository {
    pool: PgPool,
}

impl PostgresPlatformRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPlatformLinkRepository {
    pool: PgPool,
}

impl PostgresPlatformLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PlatformLinkRow {
    id: i64,
    article_id: i64,
    post_platform_id: i64,
    platform_name: String,
    post_url: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PlatformLinkRow> for PlatformLink {
    type Error = DomainError;

    fn try_from(row: PlatformLinkRow) -> Result<Self, Self::Error> {
        Ok(PlatformLink {
            id: row.id,
            article_id: ArticleId::new(row.article_id)?,
            platform_id: PlatformId::new(row.post_platform_id)?,
            platform: row.platform_name.parse()?,
            post_url: row.post_url,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PlatformStatRow {
    platform_name: String,
    article_count: i64,
}

#[async_trait]
impl PlatformRepository for PostgresPlatformRepository {
    async fn get_or_create(&self, platform: Platform) -> DomainResult<PlatformId> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO post_platforms (platform_name, created_at, updated_at)
             VALUES ($1, NOW(), NOW())
             ON CONFLICT (platform_name) DO UPDATE SET platform_name = EXCLUDED.platform_name
             RETURNING id",
        )
        .bind(platform.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PlatformId::new(id)
    }

    async fn stats(&self) -> DomainResult<Vec<PlatformStat>> {
        let rows = sqlx::query_as::<_, PlatformStatRow>(
            "SELECT p.platform_name, COUNT(DISTINCT l.article_id) AS article_count
             FROM post_platforms p
             LEFT JOIN article_platforms l ON l.post_platform_id = p.id
             GROUP BY p.id, p.platform_name
             ORDER BY p.platform_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut stats = Vec::with_capacity(rows.len());
        for row in rows {
            match row.platform_name.parse::<Platform>() {
                Ok(platform) => stats.push(PlatformStat {
                    platform,
                    article_count: u64::try_from(row.article_count).unwrap_or_default(),
                }),
                Err(err) => {
                    tracing::warn!(platform = %row.platform_name, error = %err, "skipping unknown platform row");
                }
            }
        }
        Ok(stats)
    }
}

#[async_trait]
impl PlatformLinkRepository for PostgresPlatformLinkRepository {
    async fn insert(&self, link: NewPlatformLink) -> DomainResult<PlatformLink> {
        let NewPlatformLink {
            article_id,
            platform_id,
            post_url,
            created_at,
        } = link;

        let row = sqlx::query_as::<_, PlatformLinkRow>(
            "WITH inserted AS (
                 INSERT INTO article_platforms (article_id, post_platform_id, post_url, created_at)
                 VALUES ($1, $2, $3, $4)
                 RETURNING id, article_id, post_platform_id, post_url, created_at
             )
             SELECT i.id, i.article_id, i.post_platform_id, p.platform_name, i.post_url, i.created_at
             FROM inserted i
             JOIN post_platforms p ON p.id = i.post_platform_id",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(platform_id))
        .bind(post_url)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PlatformLink::try_from(row)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<PlatformLink>> {
        let rows = sqlx::query_as::<_, PlatformLinkRow>(
            "SELECT l.id, l.article_id, l.post_platform_id, p.platform_name, l.post_url, l.created_at
             FROM article_platforms l
             JOIN post_platforms p ON p.id = l.post_platform_id
             WHERE l.article_id = $1
             ORDER BY l.id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PlatformLink::try_from).collect()
    }
}
