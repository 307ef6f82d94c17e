pub mod articles;
pub mod auth;
pub mod publishing;

pub use articles::{ArticleDto, ArticleHtmlDto, ArticlePageDto, PlatformLinkDto, PlatformStatDto};
pub use auth::AuthenticatedClient;
pub use publishing::{PublishResultDto, PublishSummaryDto, VerifyTargetDto};
