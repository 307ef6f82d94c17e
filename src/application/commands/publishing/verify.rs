// src/application/commands/publishing/verify.rs
use super::{PublishingService, TargetCredentials};
use crate::{
    application::{
        dto::VerifyTargetDto,
        error::ApplicationResult,
        ports::site_client::{STATUS_UNAUTHORIZED, SiteResponse},
    },
    domain::publishing::{PublishTarget, VerifyOutcome},
};

pub struct VerifyTargetCommand {
    pub credentials: TargetCredentials,
}

impl PublishingService {
    /// Checks that a site is reachable and that the credentials authenticate.
    /// Read only: nothing is persisted regardless of the outcome.
    pub async fn verify_target(
        &self,
        command: VerifyTargetCommand,
    ) -> ApplicationResult<VerifyTargetDto> {
        let target = command.credentials.into_target()?;
        let outcome = self.probe_target(&target).await;

        tracing::info!(
            site = %target.site(),
            outcome = outcome.kind(),
            "site credentials verified"
        );
        Ok(outcome.into())
    }

    pub(super) async fn probe_target(&self, target: &PublishTarget) -> VerifyOutcome {
        match self.site_client.discover(target.site()).await {
            Ok(response) if response.is_success() => {}
            Ok(response) => return VerifyOutcome::Unreachable(response.status_line()),
            Err(err) => return VerifyOutcome::Unreachable(err.to_string()),
        }

        match self.site_client.current_user(target).await {
            Ok(response) if response.is_success() => VerifyOutcome::Valid,
            Ok(response) if response.status == STATUS_UNAUTHORIZED => {
                VerifyOutcome::classify_rejection(&rejection_message(&response))
            }
            Ok(response) => VerifyOutcome::Unknown(format!(
                "{}: {}",
                response.status_line(),
                response.body.trim()
            )),
            Err(err) => VerifyOutcome::Unknown(err.to_string()),
        }
    }
}

/// The `message` field of a JSON error body; empty when absent or unparsable.
fn rejection_message(response: &SiteResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_default()
}
