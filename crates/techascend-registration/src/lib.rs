//! Registration subsystem: public sign-up for events, self-service lookup,
//! and admin management of registrations.

#![forbid(unsafe_code)]

pub mod handler;
pub mod types;

mod prelude;

// vim: ts=4
