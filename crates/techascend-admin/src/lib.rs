//! Admin API handlers: listing, granting and revoking admin access

#![forbid(unsafe_code)]

pub mod handler;
pub mod perm;

mod prelude;

// vim: ts=4
