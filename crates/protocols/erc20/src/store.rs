//! Registry of tokens deployed through this service

use std::sync::RwLock;

use alloy_primitives::Address;

use crate::state::{DeployedToken, TokenError};

/// Storage seam for deployed tokens. Implementations must be shareable
/// across request handlers.
pub trait TokenStore: Send + Sync {
    /// Insert a token, replacing any existing record with the same address
    fn record(&self, token: DeployedToken) -> Result<(), TokenError>;

    /// All tokens, oldest first
    fn list(&self) -> Result<Vec<DeployedToken>, TokenError>;

    fn get(&self, address: &Address) -> Result<Option<DeployedToken>, TokenError>;
}

/// Process-local store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<Vec<DeployedToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> TokenError {
    TokenError::Store("token registry lock poisoned".to_string())
}

impl TokenStore for InMemoryTokenStore {
    fn record(&self, token: DeployedToken) -> Result<(), TokenError> {
        let mut tokens = self.tokens.write().map_err(poisoned)?;
        match tokens.iter_mut().find(|t| t.address == token.address) {
            Some(existing) => *existing = token,
            None => {
                tracing::info!(address = %token.address, symbol = %token.symbol, "Recorded token");
                tokens.push(token);
            }
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<DeployedToken>, TokenError> {
        Ok(self.tokens.read().map_err(poisoned)?.clone())
    }

    fn get(&self, address: &Address) -> Result<Option<DeployedToken>, TokenError> {
        Ok(self
            .tokens
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|t| &t.address == address)
            .cloned())
    }
}
