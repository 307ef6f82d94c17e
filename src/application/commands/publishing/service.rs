// src/application/commands/publishing/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, MarkdownRendererPort, TargetSiteClientPort},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        platform::{PlatformLinkRepository, PlatformRepository},
    },
};

/// Publishes stored articles to remote WordPress sites and probes site
/// credentials. Holds no per-site state between calls.
pub struct PublishingService {
    pub(super) article_read: Arc<dyn ArticleReadRepository>,
    pub(super) article_write: Arc<dyn ArticleWriteRepository>,
    pub(super) platforms: Arc<dyn PlatformRepository>,
    pub(super) links: Arc<dyn PlatformLinkRepository>,
    pub(super) site_client: Arc<TargetSiteClientPort>,
    pub(super) renderer: Arc<MarkdownRendererPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl PublishingService {
    pub fn new(
        article_read: Arc<dyn ArticleReadRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        platforms: Arc<dyn PlatformRepository>,
        links: Arc<dyn PlatformLinkRepository>,
        site_client: Arc<TargetSiteClientPort>,
        renderer: Arc<MarkdownRendererPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            article_read,
            article_write,
            platforms,
            links,
            site_client,
            renderer,
            clock,
        }
    }
}
