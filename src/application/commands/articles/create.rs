// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleBody, ArticleHeading, NewArticle},
};

pub struct CreateArticleCommand {
    pub heading: String,
    pub body: String,
}

impl ArticleCommandService {
    /// Stores a new article in `Draft` state.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let heading = ArticleHeading::new(command.heading)?;
        let body = ArticleBody::new(command.body)?;

        let created = self
            .write_repo
            .insert(NewArticle {
                heading,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
