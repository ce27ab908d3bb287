//! Settings subsystem: service and HTTP handlers

pub mod handler;
pub mod service;

pub use service::SettingsService;

// vim: ts=4
