pub use techascend_core::prelude::*;

// vim: ts=4
