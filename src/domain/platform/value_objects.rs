// src/domain/platform/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(pub i64);

impl PlatformId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "platform id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PlatformId> for i64 {
    fn from(value: PlatformId) -> Self {
        value.0
    }
}

/// Publishing platforms this service knows how to post to. The stored
/// `platform_name` column is the `as_str` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    WordPress,
}

impl Platform {
    pub const ALL: [Platform; 1] = [Platform::WordPress];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::WordPress => "WordPress",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WordPress" => Ok(Platform::WordPress),
            other => Err(DomainError::Validation(format!(
                "unknown platform '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_round_trips_through_name() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "Medium".parse::<Platform>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("Medium")));
    }
}
