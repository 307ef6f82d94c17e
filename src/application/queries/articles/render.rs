use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleHtmlDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct RenderArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// The article body exactly as it would be submitted to a publishing target.
    pub async fn render_article(&self, query: RenderArticleQuery) -> ApplicationResult<ArticleHtmlDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        Ok(ArticleHtmlDto {
            html_content: self.renderer.render(article.body.as_str()),
            title: article.heading.into(),
        })
    }
}
