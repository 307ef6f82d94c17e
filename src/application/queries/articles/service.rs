use std::sync::Arc;

use crate::{
    application::ports::MarkdownRendererPort,
    domain::{
        article::ArticleReadRepository,
        platform::{PlatformLinkRepository, PlatformRepository},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) link_repo: Arc<dyn PlatformLinkRepository>,
    pub(super) platform_repo: Arc<dyn PlatformRepository>,
    pub(super) renderer: Arc<MarkdownRendererPort>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        link_repo: Arc<dyn PlatformLinkRepository>,
        platform_repo: Arc<dyn PlatformRepository>,
        renderer: Arc<MarkdownRendererPort>,
    ) -> Self {
        Self {
            read_repo,
            link_repo,
            platform_repo,
            renderer,
        }
    }
}
