// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub body: String,
}

impl ArticleCommandService {
    /// Replaces the markdown body. Publish status and platform links are kept.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let body = ArticleBody::new(command.body)?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.set_body(body, self.clock.now());
        let updated = self
            .write_repo
            .update_body(id, article.body, article.updated_at)
            .await?;
        Ok(updated.into())
    }
}
