// src/application/commands/publishing/mod.rs
mod fan_out;
mod service;
mod single;
mod verify;

pub use fan_out::PublishToManyCommand;
pub use service::PublishingService;
pub use verify::VerifyTargetCommand;

use crate::{application::error::ApplicationResult, domain::publishing::PublishTarget};

/// Site URL and credentials as received from a caller, before validation.
pub struct TargetCredentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl TargetCredentials {
    pub(crate) fn into_target(self) -> ApplicationResult<PublishTarget> {
        Ok(PublishTarget::new(self.url, self.username, self.password)?)
    }
}
