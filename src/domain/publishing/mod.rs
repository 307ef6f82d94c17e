pub mod outcome;
pub mod target;

pub use outcome::{PublishOutcome, PublishResult, PublishSummary, TargetStatus, VerifyOutcome};
pub use target::{PostPayload, PostStatus, PublishTarget, SitePassword, SiteUrl, SiteUsername};
