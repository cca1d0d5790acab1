//! Wire types for the Shopify Admin customers endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown to the front-end for missing customer data.
pub const MISSING_FIELD_PLACEHOLDER: &str = "Sem informação";

/// Response envelope returned by `GET /admin/api/{version}/customers.json`.
///
/// A missing `customers` key decodes as an empty page.
#[derive(Debug, Deserialize)]
pub struct CustomersEnvelope {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// One customer record as Shopify returns it.
///
/// Shopify sends many more fields per customer; only the three the front-end
/// displays are decoded, and each may be absent, `null`, or a non-string
/// value, so they are kept as raw JSON values until formatting.
#[derive(Debug, Default, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: Value,
    #[serde(default)]
    pub last_name: Value,
    #[serde(default)]
    pub phone: Value,
}

/// The three-field customer shape the front-end consumes.
///
/// Field names (`Nome`, `sobrenome`, `phone`) are part of the contract with
/// the Bubble front-end and must not change.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FormattedCustomer {
    #[serde(rename = "Nome")]
    pub nome: String,
    pub sobrenome: String,
    pub phone: String,
}

impl From<Customer> for FormattedCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            nome: format_field(&customer.first_name),
            sobrenome: format_field(&customer.last_name),
            phone: format_field(&customer.phone),
        }
    }
}

/// Apply the placeholder policy to one source value.
///
/// Strings are trimmed; `null`, empty-after-trim, and the literal `"None"`
/// (seen in exports that round-tripped through Python tooling) all collapse
/// to the placeholder. Non-string values are stringified as-is.
fn format_field(value: &Value) -> String {
    let text = match value {
        Value::Null => return MISSING_FIELD_PLACEHOLDER.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };

    if text.is_empty() || text == "None" {
        MISSING_FIELD_PLACEHOLDER.to_string()
    } else {
        text
    }
}
