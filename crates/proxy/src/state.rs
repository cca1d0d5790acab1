//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ProxyConfig;
use crate::shopify::CustomerClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is immutable after startup,
/// so concurrent requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ProxyConfig,
    shopify: CustomerClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                shopify: CustomerClient::new(),
            }),
        }
    }

    /// Get a reference to the proxy configuration.
    #[must_use]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &CustomerClient {
        &self.inner.shopify
    }
}
