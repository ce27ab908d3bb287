//! Shared types, adapter traits, and core utilities for the TechAscend service.
//!
//! This crate contains the foundational types that are shared between the
//! feature crates and all storage adapter implementations. Keeping them in a
//! separate crate lets the adapters compile without pulling in the HTTP layer.

#![forbid(unsafe_code)]

pub mod error;
pub mod identity_provider;
pub mod prelude;
pub mod store_adapter;
pub mod types;
pub mod utils;

// vim: ts=4
