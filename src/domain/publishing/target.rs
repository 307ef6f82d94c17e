// src/domain/publishing/target.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;
use url::Url;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Base URL of a remote site, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    raw: String,
    base: String,
}

impl SiteUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let raw = value.into().trim().to_string();
        let parsed = Url::parse(&raw)
            .map_err(|err| DomainError::Validation(format!("invalid site url '{raw}': {err}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "site url must use http or https: '{raw}'"
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::Validation(format!(
                "site url has no host: '{raw}'"
            )));
        }

        let base = raw.trim_end_matches('/').to_string();
        Ok(Self { raw, base })
    }

    /// The URL exactly as given (whitespace trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Joins `path` (starting with `/`) onto the base URL without a doubled slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUsername(String);

impl SiteUsername {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_USERNAME_LEN {
            return Err(DomainError::Validation(format!(
                "site username must be at least {MIN_USERNAME_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SitePassword(String);

impl SitePassword {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "site password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SitePassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SitePassword(***)")
    }
}

/// A remote site plus the credentials used for one call against it.
#[derive(Debug, Clone)]
pub struct PublishTarget {
    site: SiteUrl,
    username: SiteUsername,
    password: SitePassword,
}

impl PublishTarget {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            site: SiteUrl::new(url)?,
            username: SiteUsername::new(username)?,
            password: SitePassword::new(password)?,
        })
    }

    pub fn site(&self) -> &SiteUrl {
        &self.site
    }

    pub fn username(&self) -> &SiteUsername {
        &self.username
    }

    pub fn password(&self) -> &SitePassword {
        &self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
}

/// Body of a create-post request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

impl PostPayload {
    /// Posts are always published immediately; there is no remote draft state.
    pub fn publish(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: PostStatus::Publish,
        }
    }
}
