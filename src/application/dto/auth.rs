/// Caller that presented a valid API token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedClient {
    pub label: String,
}
