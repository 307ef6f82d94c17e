mod get_by_id;
mod list;
mod render;
mod service;
mod stats;

pub use get_by_id::GetArticleByIdQuery;
pub use list::{DEFAULT_PER_PAGE, ListArticlesQuery, MAX_PER_PAGE};
pub use render::RenderArticleQuery;
pub use service::ArticleQueryService;
