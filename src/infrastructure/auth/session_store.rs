use crate::domain::user::{
    credentials::{CredentialProvider, SessionStore},
    entity::TokenPair,
};
use std::sync::RwLock;

/// Session held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: RwLock::new(Some(tokens)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }
}

impl CredentialProvider for InMemorySessionStore {
    fn bearer_token(&self) -> Option<String> {
        // Poisoning leaves the stored tokens intact.
        let guard = self.tokens.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.as_ref().map(|tokens| tokens.access.clone())
    }
}

impl SessionStore for InMemorySessionStore {
    fn tokens(&self) -> Option<TokenPair> {
        let guard = self.tokens.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone()
    }

    fn store(&self, tokens: TokenPair) {
        let mut guard = self.tokens.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(tokens);
    }

    fn clear(&self) {
        let mut guard = self.tokens.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
    }
}

/// Provider that never has a credential, for anonymous browsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
