//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers one route, driving the real router over a localhost
//! socket with the upstream replaced by a stub or an `httpmock` server.

#![cfg(test)]

mod helpers;

mod test_movie;
mod test_not_found;
mod test_upstream_passthrough;
