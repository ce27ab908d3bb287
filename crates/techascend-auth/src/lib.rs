//! Authentication subsystem.
//!
//! Sign-in itself is handled by an external identity provider; this crate
//! only verifies the session tokens it issues and attaches the resulting
//! identity to requests.

#![forbid(unsafe_code)]

pub mod jwt;
pub mod middleware;

mod prelude;

pub use jwt::{JwtConfig, JwtIdentityProvider, JwtKey};
pub use middleware::resolve_identity;

// vim: ts=4
