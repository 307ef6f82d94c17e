// src/application/commands/publishing/fan_out.rs
use super::{PublishingService, TargetCredentials};
use crate::{
    application::{
        dto::PublishSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        publishing::{PublishResult, PublishSummary, PublishTarget},
    },
};

pub struct PublishToManyCommand {
    pub article_id: i64,
    pub targets: Vec<TargetCredentials>,
}

impl PublishingService {
    /// Publishes one article to every target, in order, one at a time.
    ///
    /// Validation of the whole target list and the article lookup happen
    /// before the first request. After that every target is attempted and a
    /// failing target never stops the ones after it.
    pub async fn publish_to_many(
        &self,
        command: PublishToManyCommand,
    ) -> ApplicationResult<PublishSummaryDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let targets = command
            .targets
            .into_iter()
            .map(TargetCredentials::into_target)
            .collect::<ApplicationResult<Vec<PublishTarget>>>()?;

        if self.article_read.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let summary = self.publish_article_to_targets(article_id, &targets).await;

        tracing::info!(
            article_id = %article_id,
            total = summary.total(),
            succeeded = summary.success_count(),
            failed = summary.failure_count(),
            "fan-out publish finished"
        );
        Ok(summary.into())
    }

    pub(super) async fn publish_article_to_targets(
        &self,
        article_id: ArticleId,
        targets: &[PublishTarget],
    ) -> PublishSummary {
        let mut results = Vec::with_capacity(targets.len());

        for target in targets {
            let url = target.site().as_str();
            let result = match self.publish_to_target(article_id, target).await {
                Ok(outcome) => PublishResult::from_outcome(url, outcome),
                Err(err) => {
                    tracing::warn!(
                        article_id = %article_id,
                        site = %url,
                        error = %err,
                        "publish attempt aborted"
                    );
                    PublishResult::failed(url, err.to_string())
                }
            };
            results.push(result);
        }

        PublishSummary::from_results(results)
    }
}
