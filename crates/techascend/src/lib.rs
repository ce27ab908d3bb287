//! TechAscend event service.
//!
//! # Features
//!
//! - Public event listing with a derived registration status
//! - Self-service registration, one per email and event
//! - Admin API for events, registrations, the admin list and settings
//! - Pluggable storage (flat JSON files or SQLite)
//! - Identity from externally issued JWT session tokens

#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from techascend-types
pub use techascend_types::error;
pub use techascend_types::identity_provider;
pub use techascend_types::store_adapter;
pub use techascend_types::types;
pub use techascend_types::utils;

// Feature crate re-exports
pub use techascend_admin as admin;
pub use techascend_auth as auth;
pub use techascend_core::settings;
pub use techascend_event as event;
pub use techascend_registration as registration;

// Local modules
pub mod app;
pub mod migrate;
pub mod prelude;
pub mod request_log;
pub mod routes;

pub use crate::app::{App, AppBuilder};

// vim: ts=4
