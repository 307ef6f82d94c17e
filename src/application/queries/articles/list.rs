use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, ArticlePageDto},
    error::{ApplicationError, ApplicationResult},
};

pub const DEFAULT_PER_PAGE: u32 = 7;
pub const MAX_PER_PAGE: u32 = 100;

pub struct ListArticlesQuery {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePageDto> {
        if query.page == 0 {
            return Err(ApplicationError::validation("page starts at 1"));
        }
        if query.per_page == 0 || query.per_page > MAX_PER_PAGE {
            return Err(ApplicationError::validation(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        let page = self.read_repo.list_page(query.page, query.per_page).await?;

        let mut data = Vec::with_capacity(page.items.len());
        for article in page.items {
            let links = self.link_repo.list_by_article(article.id).await?;
            data.push(ArticleDto::with_links(article, links));
        }

        Ok(ArticlePageDto {
            data,
            current_page: query.page,
            last_page: last_page(page.total, query.per_page),
            total: page.total,
        })
    }
}

/// Number of the last page; an empty listing still has page 1.
fn last_page(total: u64, per_page: u32) -> u32 {
    let pages = total.div_ceil(u64::from(per_page)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
