// src/domain/publishing/outcome.rs
use std::fmt;

/// Result of publishing one article to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Success,
    Failed,
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Success => "success",
            TargetStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TargetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-target entry of a fan-out summary. `error` is present iff the
/// attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    url: String,
    error: Option<String>,
}

impl PublishResult {
    pub fn success(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
        }
    }

    pub fn from_outcome(url: impl Into<String>, outcome: PublishOutcome) -> Self {
        match outcome {
            PublishOutcome::Success => Self::success(url),
            PublishOutcome::Failure(detail) => Self::failed(url, detail),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> TargetStatus {
        if self.error.is_some() {
            TargetStatus::Failed
        } else {
            TargetStatus::Success
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Aggregate of a fan-out call. Counts are derived from `results`, so
/// `success_count + failure_count == total == results.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    success_count: usize,
    failure_count: usize,
    results: Vec<PublishResult>,
}

impl PublishSummary {
    pub fn from_results(results: Vec<PublishResult>) -> Self {
        let success_count = results
            .iter()
            .filter(|r| r.status() == TargetStatus::Success)
            .count();
        let failure_count = results.len() - success_count;
        Self {
            success_count,
            failure_count,
            results,
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.success_count
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    pub fn results(&self) -> &[PublishResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<PublishResult> {
        self.results
    }
}

/// Result of probing a target's reachability and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Valid,
    Unreachable(String),
    InvalidUsername,
    InvalidPassword,
    InvalidBoth,
    Unknown(String),
}

impl VerifyOutcome {
    /// Classifies the `message` of a 401 from a WordPress identity endpoint.
    ///
    /// This is a case-sensitive substring match on WordPress's own error
    /// wording ("Unknown username", "The password you entered ..."). Sites
    /// that localise or rewrite those messages fall through to `InvalidBoth`.
    pub fn classify_rejection(message: &str) -> Self {
        if message.contains("username") {
            VerifyOutcome::InvalidUsername
        } else if message.contains("password") {
            VerifyOutcome::InvalidPassword
        } else {
            VerifyOutcome::InvalidBoth
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }

    /// Stable machine-readable name of the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            VerifyOutcome::Valid => "valid",
            VerifyOutcome::Unreachable(_) => "site_unreachable",
            VerifyOutcome::InvalidUsername => "invalid_username",
            VerifyOutcome::InvalidPassword => "invalid_password",
            VerifyOutcome::InvalidBoth => "invalid_credentials",
            VerifyOutcome::Unknown(_) => "unknown",
        }
    }

    /// Human-readable reason for a failed verification.
    pub fn reason(&self) -> Option<String> {
        match self {
            VerifyOutcome::Valid => None,
            VerifyOutcome::Unreachable(detail) => {
                Some(format!("WordPress site not accessible: {detail}"))
            }
            VerifyOutcome::InvalidUsername => Some("Invalid WordPress username".into()),
            VerifyOutcome::InvalidPassword => Some("Invalid WordPress password".into()),
            VerifyOutcome::InvalidBoth => {
                Some("Both username and password are incorrect".into())
            }
            VerifyOutcome::Unknown(detail) => {
                Some(format!("Unable to verify credentials: {detail}"))
            }
        }
    }
}
