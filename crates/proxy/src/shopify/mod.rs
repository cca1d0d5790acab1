//! Shopify Admin REST API client for the customers endpoint.
//!
//! # Architecture
//!
//! - One `reqwest` client shared across requests, with the fixed 10 second
//!   timeout baked in at construction
//! - The shop domain and access token arrive per-request from the caller;
//!   nothing is cached or stored between requests
//! - A single page fetch per call - no cursor follow-up
//!
//! Errors are classified into the outcome kinds the route layer maps to
//! response statuses, instead of leaking `reqwest::Error` upward.

mod client;
pub mod types;

pub use client::CustomerClient;
pub use types::{Customer, FormattedCustomer, MISSING_FIELD_PLACEHOLDER};

use thiserror::Error;

/// Errors that can occur when calling the Shopify Admin API.
///
/// Variants are ordered by the priority in which outcomes are decided: a
/// completed exchange with a bad status wins over transport classification.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream completed the exchange with a non-2xx status.
    #[error("Shopify returned HTTP {status}")]
    Status {
        /// The upstream status code, forwarded to the client when valid.
        status: u16,
        /// Raw upstream body, surfaced verbatim as `details`.
        body: String,
    },

    /// The request exceeded the fixed timeout.
    #[error("timeout")]
    Timeout,

    /// Connecting to the shop host failed (DNS, refused, reset).
    #[error("connection error")]
    Connect,

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered 2xx but the body was not the expected JSON.
    #[error("invalid upstream response body: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Classify a `reqwest` send failure into an outcome kind.
    fn from_send_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else {
            Self::Transport(err.to_string())
        }
    }

    /// Classify a body-read or JSON-decode failure.
    ///
    /// A timeout can still fire while the body is streaming, so it keeps
    /// priority over the decode classification.
    fn from_body_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Decode(err.to_string())
        }
    }
}
