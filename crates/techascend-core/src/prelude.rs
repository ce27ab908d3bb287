pub use crate::app::App;
pub use techascend_types::prelude::*;

// vim: ts=4
