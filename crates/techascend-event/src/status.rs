//! Derived registration status
//!
//! Registration is open only when every source agrees: the global toggle,
//! the per-event toggle, and the deadline (if any) not having passed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use techascend_types::store_adapter::EventData;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
	Open,
	Closed,
}

impl RegistrationStatus {
	pub fn is_open(self) -> bool {
		self == RegistrationStatus::Open
	}
}

pub fn registration_status(
	global_open: bool,
	event: &EventData,
	now: DateTime<Utc>,
) -> RegistrationStatus {
	let before_deadline = event.deadline.is_none_or(|deadline| now < deadline);
	if global_open && event.registration_open && before_deadline {
		RegistrationStatus::Open
	} else {
		RegistrationStatus::Closed
	}
}


// vim: ts=4
