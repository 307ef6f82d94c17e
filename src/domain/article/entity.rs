// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleHeading, ArticleId, PublishStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub heading: ArticleHeading,
    pub body: ArticleBody,
    pub publish_status: PublishStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn mark_published(&mut self, now: DateTime<Utc>) {
        self.publish_status = PublishStatus::Success;
        self.updated_at = now;
    }

    pub fn set_body(&mut self, body: ArticleBody, now: DateTime<Utc>) {
        self.body = body;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub heading: ArticleHeading,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}

/// One page of articles, newest first, plus the total row count.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            heading: ArticleHeading::new("heading").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            publish_status: PublishStatus::Draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn mark_published_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.mark_published(now);
        assert_eq!(article.publish_status, PublishStatus::Success);
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn set_body_keeps_status() {
        let mut article = sample_article();
        article.mark_published(Utc::now());
        let later = Utc::now() + chrono::Duration::seconds(5);
        article.set_body(ArticleBody::new("# new").unwrap(), later);
        assert_eq!(article.body.as_str(), "# new");
        assert_eq!(article.publish_status, PublishStatus::Success);
        assert_eq!(article.updated_at, later);
    }
}
