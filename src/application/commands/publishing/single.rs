// src/application/commands/publishing/single.rs
use super::PublishingService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{Article, ArticleId, PublishStatus},
        errors::DomainResult,
        platform::{NewPlatformLink, Platform},
        publishing::{PostPayload, PublishOutcome, PublishTarget},
    },
};

impl PublishingService {
    /// Publishes one article to one target.
    ///
    /// Only a missing article (or a failure to load it) is returned as `Err`;
    /// every problem talking to the target comes back as
    /// `PublishOutcome::Failure`.
    pub async fn publish_to_target(
        &self,
        article_id: ArticleId,
        target: &PublishTarget,
    ) -> ApplicationResult<PublishOutcome> {
        let article = self
            .article_read
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let content = self.renderer.render(article.body.as_str());
        let payload = PostPayload::publish(article.heading.as_str(), content);

        let response = match self.site_client.create_post(target, &payload).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(
                    article_id = %article_id,
                    site = %target.site(),
                    error = %err,
                    "publish request did not complete"
                );
                return Ok(PublishOutcome::Failure(err.to_string()));
            }
        };

        if !response.is_success() {
            tracing::warn!(
                article_id = %article_id,
                site = %target.site(),
                status = response.status,
                "target rejected publish request"
            );
            return Ok(PublishOutcome::Failure(response.failure_detail()));
        }

        // The remote post exists at this point; a local write failure is
        // still reported as a failed target.
        if let Err(err) = self.record_success(&article, target).await {
            tracing::error!(
                article_id = %article_id,
                site = %target.site(),
                error = %err,
                "published but failed to record platform link"
            );
            return Ok(PublishOutcome::Failure(err.to_string()));
        }

        tracing::info!(article_id = %article_id, site = %target.site(), "article published");
        Ok(PublishOutcome::Success)
    }

    async fn record_success(&self, article: &Article, target: &PublishTarget) -> DomainResult<()> {
        let now = self.clock.now();
        let platform_id = self.platforms.get_or_create(Platform::WordPress).await?;

        self.links
            .insert(NewPlatformLink {
                article_id: article.id,
                platform_id,
                post_url: target.site().as_str().to_string(),
                created_at: now,
            })
            .await?;

        self.article_write
            .set_publish_status(article.id, PublishStatus::Success, now)
            .await
    }
}
