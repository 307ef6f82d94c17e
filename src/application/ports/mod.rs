// src/application/ports/mod.rs
pub mod markdown;
pub mod security;
pub mod site_client;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AccessTokenVerifierPort = dyn security::AccessTokenVerifier;
pub type ClockPort = dyn time::Clock;
pub type MarkdownRendererPort = dyn markdown::MarkdownRenderer;
pub type TargetSiteClientPort = dyn site_client::TargetSiteClient;
