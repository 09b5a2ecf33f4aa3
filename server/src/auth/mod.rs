//! Authentication module.
//!
//! Issues and verifies the stateless session tokens handed out by
//! `POST /auth/login` and checked in front of `GET /auth/profile`.
//!
//! # Pre-conditions
//! - The shared secret is configured and non-empty.
//!
//! # Post-conditions
//! - Authentication configuration is immutable once loaded.
//!
//! # Invariants
//! - Every protected request re-proves its identity from its own header.

pub mod guard;
pub mod jwt;
pub mod keys;

pub use guard::{AuthError, AuthenticatedUser, require_auth};
pub use jwt::{Claims, JwtError, TOKEN_LIFETIME, issue_token, verify_token};
pub use keys::{JwtConfig, JwtConfigError};
