use super::entity::TokenPair;

/// Source of the bearer credential attached to authenticated requests.
///
/// Injected into the API client at construction so nothing reads tokens from
/// global state.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Credential provider that login and logout can write to.
pub trait SessionStore: CredentialProvider {
    fn tokens(&self) -> Option<TokenPair>;
    fn store(&self, tokens: TokenPair);
    fn clear(&self);
}
