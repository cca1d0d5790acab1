//! Shopify customer proxy library.
//!
//! This crate provides the proxy functionality as a library, allowing it to
//! be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
