use crate::domain::publishing::{PublishResult, PublishSummary, VerifyOutcome};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishResultDto {
    pub url: String,
    /// `success` or `failed`.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<PublishResult> for PublishResultDto {
    fn from(result: PublishResult) -> Self {
        Self {
            url: result.url().to_string(),
            status: result.status().as_str().to_string(),
            error: result.error().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishSummaryDto {
    pub message: String,
    pub total_sites: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<PublishResultDto>,
}

impl From<PublishSummary> for PublishSummaryDto {
    fn from(summary: PublishSummary) -> Self {
        let total_sites = summary.total();
        let success_count = summary.success_count();
        let failure_count = summary.failure_count();
        Self {
            message: "Multiple posting completed".into(),
            total_sites,
            success_count,
            failure_count,
            results: summary.into_results().into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyTargetDto {
    pub valid: bool,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<VerifyOutcome> for VerifyTargetDto {
    fn from(outcome: VerifyOutcome) -> Self {
        Self {
            valid: outcome.is_valid(),
            kind: outcome.kind().to_string(),
            reason: outcome.reason(),
        }
    }
}
