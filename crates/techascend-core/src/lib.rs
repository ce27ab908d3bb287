//! Core infrastructure for the TechAscend event service.
//!
//! Holds the shared application state, the request extractors, the
//! authorization gate, the admin registry and the settings subsystem. Feature
//! crates depend on this crate and on `techascend-types` only.

#![forbid(unsafe_code)]

pub mod admin_registry;
pub mod app;
pub mod extract;
pub mod gate;
pub mod prelude;
pub mod settings;

pub use app::{App, AppOpts, AppState};
pub use extract::{Admin, Auth, JsonBody, OptionalAuth, QueryParams};

// vim: ts=4
