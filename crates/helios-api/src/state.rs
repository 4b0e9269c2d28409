//! Application state shared across API handlers

use std::sync::Arc;

use erc20::{InMemoryTokenStore, TokenStore};
use helios_core::{AppConfig, BlockHeight, ChronosConfig, Network};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors from mutating shared state
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Invalid chain head: {reason}")]
    InvalidChainHead { reason: String },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RwLock<AppConfig>,
    /// Latest block reported by the frontend's provider
    chain_head: RwLock<Option<BlockHeight>>,
    tokens: Arc<dyn TokenStore>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config and an in-memory token registry
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_token_store(config, Arc::new(InMemoryTokenStore::new()))
    }

    pub fn with_token_store(config: AppConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: RwLock::new(config),
                chain_head: RwLock::new(None),
                tokens,
            }),
        }
    }

    /// Get current config
    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    pub async fn chronos_config(&self) -> ChronosConfig {
        self.inner.config.read().await.chronos.clone()
    }

    /// Get current network
    pub async fn network(&self) -> Network {
        self.inner.config.read().await.network
    }

    pub async fn chain_head(&self) -> Option<BlockHeight> {
        *self.inner.chain_head.read().await
    }

    /// Record the latest block. Heights only move forward.
    pub async fn set_chain_head(&self, height: BlockHeight) -> Result<BlockHeight, StateError> {
        if height == 0 {
            return Err(StateError::InvalidChainHead {
                reason: "height must be greater than zero".to_string(),
            });
        }

        let mut head = self.inner.chain_head.write().await;
        match *head {
            Some(current) if current > height => {
                tracing::debug!(current, reported = height, "Ignoring stale chain head");
                Ok(current)
            }
            _ => {
                *head = Some(height);
                Ok(height)
            }
        }
    }

    pub fn tokens(&self) -> Arc<dyn TokenStore> {
        self.inner.tokens.clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chain_head_moves_forward_only() {
        let state = AppState::new();
        assert_eq!(state.chain_head().await, None);

        assert_eq!(state.set_chain_head(100).await.unwrap(), 100);
        assert_eq!(state.set_chain_head(90).await.unwrap(), 100);
        assert_eq!(state.set_chain_head(120).await.unwrap(), 120);
        assert_eq!(state.chain_head().await, Some(120));
    }

    #[tokio::test]
    async fn test_zero_chain_head_rejected() {
        let state = AppState::new();
        assert!(matches!(
            state.set_chain_head(0).await,
            Err(StateError::InvalidChainHead { .. })
        ));
        assert_eq!(state.chain_head().await, None);
    }

    #[tokio::test]
    async fn test_config_accessors() {
        let state = AppState::new();
        assert_eq!(state.network().await, Network::Testnet);
        assert_eq!(state.chronos_config().await.safety_buffer_bps, 2_000);
    }
}
