// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contentcast::domain::article::{
    Article, ArticleBody, ArticleId, ArticlePage, ArticleReadRepository, ArticleWriteRepository,
    NewArticle, PublishStatus,
};
use contentcast::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Article table kept in a `Vec`. Implements both article ports so one
/// instance can back reads and writes, and counts every write call.
#[derive(Default)]
pub struct InMemoryArticleStore {
    rows: Mutex<Vec<Article>>,
    writes: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let store = Self::new();
        store.rows.lock().unwrap().extend(articles);
        store
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Number of write-port calls, successful or not.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let next = rows.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1;
        let created = Article {
            id: ArticleId::new(next)?,
            heading: article.heading,
            body: article.body,
            publish_status: PublishStatus::Draft,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn update_body(
        &self,
        id: ArticleId,
        body: ArticleBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Article> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("article"))?;
        article.set_body(body, updated_at);
        Ok(article.clone())
    }

    async fn set_publish_status(
        &self,
        id: ArticleId,
        status: PublishStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let article = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("article"))?;
        article.publish_status = status;
        article.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.touch();
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn list_page(&self, page: u32, per_page: u32) -> DomainResult<ArticlePage> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        let total = rows.len() as u64;
        let skip = (page.saturating_sub(1) * per_page) as usize;
        let items = rows.into_iter().skip(skip).take(per_page as usize).collect();
        Ok(ArticlePage { items, total })
    }
}
