//! The customer relay endpoint.

use axum::Json;
use axum::extract::{Query, State};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::shopify::FormattedCustomer;
use crate::state::AppState;

/// Query parameters for `GET /proxy/customers`.
///
/// Both fields are optional at the extractor level so that absence reaches
/// the handler as a validation outcome instead of an axum rejection.
#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    #[serde(default)]
    shop_domain: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
}

/// `GET /proxy/customers?shop_domain=…&access_token=…`
///
/// Validates the two required parameters, fetches one page of customers from
/// the shop's Admin API, and returns them in the three-field front-end shape.
/// Any failure past validation short-circuits to an `{error, [details]}`
/// envelope; no partial list is ever returned.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CustomerQuery>,
) -> Result<Json<Vec<FormattedCustomer>>> {
    info!("received request for /proxy/customers");

    let shop_domain = params
        .shop_domain
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let token_present = params
        .access_token
        .as_deref()
        .is_some_and(|token| !token.trim().is_empty());

    info!(
        shop_domain = %shop_domain,
        access_token = if token_present { "[REDACTED]" } else { "(missing)" },
        "query parameters"
    );

    if shop_domain.is_empty() || !token_present {
        warn!("rejecting request with missing parameters");
        return Err(AppError::MissingParams);
    }

    // Token is forwarded as received; only the emptiness check trims
    let access_token = SecretString::from(params.access_token.unwrap_or_default());

    let customers = state
        .shopify()
        .list_customers(shop_domain, &access_token)
        .await?;

    info!(count = customers.len(), "relaying formatted customers");
    let formatted: Vec<FormattedCustomer> =
        customers.into_iter().map(FormattedCustomer::from).collect();

    Ok(Json(formatted))
}
