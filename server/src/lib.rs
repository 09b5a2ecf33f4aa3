// Life of a request:
// 1. axum routes the request to a handler (protected routes pass the bearer
//    gate first, which attaches the caller's identity)
// 2. The handler makes at most one call: upstream fetch or token issuance
// 3. The result is reshaped into a JSON envelope or the HTML summary page
//
// System components:
//  - Upstream movie client
//  - Token issuer / verifier
//  - Route handlers

#![cfg_attr(
    test,
    allow(clippy::disallowed_methods, clippy::expect_used, clippy::unwrap_used)
)]

pub mod auth;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod telemetry;
pub mod types;
pub mod upstream;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod testing;

pub use routes::{AppState, router};
