//! Event subsystem: public listing and admin editing of events.

#![forbid(unsafe_code)]

pub mod handler;
pub mod status;
pub mod types;

mod prelude;

// vim: ts=4
