//! HTTP client for the Shopify Admin customers endpoint.

use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::UpstreamError;
use super::types::{Customer, CustomersEnvelope};
use crate::config::{SHOPIFY_API_VERSION, UPSTREAM_TIMEOUT};

/// Header Shopify expects the Admin API access token in.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin API client scoped to the customers collection.
///
/// The client holds no credentials: the shop domain and access token are
/// supplied per call by the route handler.
#[derive(Clone)]
pub struct CustomerClient {
    client: reqwest::Client,
}

impl CustomerClient {
    /// Create a new client with the fixed upstream timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .connect_timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch one page of customers for a shop.
    ///
    /// Issues a single `GET https://{shop_domain}/admin/api/{version}/customers.json`
    /// with the token in the `X-Shopify-Access-Token` header. No retries and
    /// no cursor follow-up: whatever page Shopify returns is the result.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` classifying the failure: a non-2xx upstream
    /// status (with the raw body), a timeout, a connect failure, or another
    /// transport/decode problem.
    #[instrument(skip(self, access_token), fields(shop_domain = %shop_domain))]
    pub async fn list_customers(
        &self,
        shop_domain: &str,
        access_token: &SecretString,
    ) -> Result<Vec<Customer>, UpstreamError> {
        let url = format!("https://{shop_domain}/admin/api/{SHOPIFY_API_VERSION}/customers.json");
        debug!(%url, "dispatching request to Shopify");

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, access_token.expose_secret())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::from_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Shopify returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: CustomersEnvelope = response
            .json()
            .await
            .map_err(|e| UpstreamError::from_body_error(&e))?;

        debug!(count = envelope.customers.len(), "customer page fetched");
        Ok(envelope.customers)
    }
}

impl Default for CustomerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CustomerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerClient").finish_non_exhaustive()
    }
}
