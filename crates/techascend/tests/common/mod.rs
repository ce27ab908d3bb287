//! Common test utilities and helpers
//!
//! Shared by the API integration tests: app builders over both store
//! adapters, a fixed-token identity provider and request helpers.

#![allow(dead_code)]

pub mod adapters;
pub mod fixtures;

pub use adapters::*;
pub use fixtures::*;

// vim: ts=4
