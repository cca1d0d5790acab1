//! In-process tests for the proxy server.
//!
//! Each test spawns the full router on an ephemeral port and talks to it
//! with `reqwest`, so validation, CORS, and error mapping are exercised
//! through the real HTTP surface. No Shopify credentials are required; the
//! success path against a live shop is covered by the ignored tests in
//! `crates/integration-tests`.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::http::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

use shopify_customer_proxy::config::ProxyConfig;
use shopify_customer_proxy::routes;
use shopify_customer_proxy::state::AppState;

const FRONT_END_ORIGIN: &str = "https://ecomlyze-62237.bubbleapps.io";

/// Spawn the app on an ephemeral port and return its base URL.
async fn spawn_app(allowed_origins: Vec<String>) -> String {
    let config = ProxyConfig {
        port: 0,
        allowed_origins,
        sentry_dsn: None,
    };
    let state = AppState::new(config);
    let app = routes::app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn default_origins() -> Vec<String> {
    vec![
        FRONT_END_ORIGIN.to_string(),
        "http://localhost:3000".to_string(),
    ]
}

/// Start a listener that only counts connection attempts.
async fn start_connection_counter() -> (String, Arc<AtomicU32>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let count = Arc::new(AtomicU32::new(0));

    let counter = count.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });

    (addr.to_string(), count)
}

#[tokio::test]
async fn test_health() {
    let base_url = spawn_app(default_origins()).await;

    let resp = reqwest::get(format!("{base_url}/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_missing_both_parameters_is_400() {
    let base_url = spawn_app(default_origins()).await;

    let resp = reqwest::get(format!("{base_url}/proxy/customers"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["error"],
        "shop_domain and access_token parameters are required"
    );
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_missing_either_parameter_is_400_without_upstream_contact() {
    let base_url = spawn_app(default_origins()).await;
    let (upstream_addr, upstream_hits) = start_connection_counter().await;

    // shop_domain present, access_token missing
    let resp = reqwest::get(format!(
        "{base_url}/proxy/customers?shop_domain={upstream_addr}"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // access_token present, shop_domain missing
    let resp = reqwest::get(format!("{base_url}/proxy/customers?access_token=shpat_x"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Both present but empty after trimming
    let resp = reqwest::get(format!(
        "{base_url}/proxy/customers?shop_domain=%20&access_token=%20"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(upstream_hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreachable_shop_is_502_connection_error() {
    let base_url = spawn_app(default_origins()).await;

    // Port 1 on loopback refuses immediately
    let resp = reqwest::get(format!(
        "{base_url}/proxy/customers?shop_domain=127.0.0.1:1&access_token=shpat_x"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "connection error");
}

#[tokio::test]
async fn test_unresponsive_shop_is_504_timeout() {
    let base_url = spawn_app(default_origins()).await;

    // Accepts the TCP connection but never completes the TLS handshake, so
    // the client's total timeout fires. This test waits out the full 10s.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream_addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let resp = reqwest::get(format!(
        "{base_url}/proxy/customers?shop_domain={upstream_addr}&access_token=shpat_x"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "timeout");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_allowed_origin_receives_cors_header() {
    let base_url = spawn_app(default_origins()).await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base_url}/proxy/customers"))
        .header("Origin", FRONT_END_ORIGIN)
        .send()
        .await
        .unwrap();

    let allow_origin = resp
        .headers()
        .get("access-control-allow-origin")
        .expect("allowed origin should receive the CORS header");
    assert_eq!(allow_origin, FRONT_END_ORIGIN);
}

#[tokio::test]
async fn test_other_origin_receives_no_cors_header() {
    let base_url = spawn_app(default_origins()).await;

    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base_url}/proxy/customers"))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();

    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_preflight_is_answered_by_the_cors_layer() {
    let base_url = spawn_app(default_origins()).await;

    let client = reqwest::Client::new();
    let resp = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{base_url}/proxy/customers"),
        )
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    let allow_methods = resp
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allow_methods.contains("GET"));
}
