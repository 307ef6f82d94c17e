// tests/support/mocks/mod.rs
//! In-memory stand-ins for the persistence ports.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod platform_repos;
pub mod time;

pub use article_repos::InMemoryArticleStore;
pub use platform_repos::{FailingLinkRepo, InMemoryPlatformStore};
pub use time::{FixedClock, fixed_now};
