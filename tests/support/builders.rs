// tests/support/builders.rs
use super::mocks::fixed_now;
use chrono::{DateTime, Utc};
use contentcast::domain::article::*;

pub struct ArticleBuilder {
    id: i64,
    heading: String,
    body: String,
    publish_status: PublishStatus,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            heading: "Test Article".into(),
            body: "# Hello\n\nFirst paragraph.".into(),
            publish_status: PublishStatus::Draft,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.publish_status = PublishStatus::Success;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            heading: ArticleHeading::new(self.heading).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            publish_status: self.publish_status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
