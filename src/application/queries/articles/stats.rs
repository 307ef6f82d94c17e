use super::ArticleQueryService;
use crate::application::{dto::PlatformStatDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn platform_stats(&self) -> ApplicationResult<Vec<PlatformStatDto>> {
        let stats = self.platform_repo.stats().await?;
        Ok(stats.into_iter().map(Into::into).collect())
    }
}
