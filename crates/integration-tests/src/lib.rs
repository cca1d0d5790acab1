//! Live integration tests for the Shopify customer proxy.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the proxy
//! cargo run -p shopify-customer-proxy
//!
//! # Run the live tests against it
//! PROXY_BASE_URL=http://localhost:5000 \
//! SHOPIFY_TEST_SHOP=your-shop.myshopify.com \
//! SHOPIFY_TEST_TOKEN=shpat_... \
//! cargo test -p shopify-customer-proxy-integration-tests -- --ignored
//! ```
//!
//! Tests that need a live shop are `#[ignore]`d so that `cargo test` stays
//! green without credentials. The in-process tests in `crates/proxy` cover
//! everything that does not require a real Shopify tenant.
