// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{articles::ArticleCommandService, publishing::PublishingService},
        dto::AuthenticatedClient,
        ports::{AccessTokenVerifierPort, ClockPort, MarkdownRendererPort, TargetSiteClientPort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        platform::{PlatformLinkRepository, PlatformRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub publishing: Arc<PublishingService>,
    token_verifier: Arc<AccessTokenVerifierPort>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        platform_repo: Arc<dyn PlatformRepository>,
        platform_link_repo: Arc<dyn PlatformLinkRepository>,
        site_client: Arc<TargetSiteClientPort>,
        renderer: Arc<MarkdownRendererPort>,
        token_verifier: Arc<AccessTokenVerifierPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&platform_link_repo),
            Arc::clone(&platform_repo),
            Arc::clone(&renderer),
        ));

        let publishing = Arc::new(PublishingService::new(
            article_read_repo,
            article_write_repo,
            platform_repo,
            platform_link_repo,
            site_client,
            renderer,
            clock,
        ));

        Self {
            article_commands,
            article_queries,
            publishing,
            token_verifier,
        }
    }

    /// Validate a raw bearer token presented to the HTTP API.
    pub fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedClient> {
        self.token_verifier.authenticate(token)
    }
}
