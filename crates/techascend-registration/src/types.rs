//! Registration requests and validation

use chrono::{DateTime, Utc};
use serde::Deserialize;

use techascend_types::store_adapter::RegistrationData;
use techascend_types::utils::{
	MAX_TEXT_LEN, de_opt_id, de_opt_text, is_valid_email, normalize_email, sanitize, sanitize_or,
};

use crate::prelude::*;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NOT_PROVIDED: &str = "Not provided";
pub const UNKNOWN_EVENT: &str = "Unknown Event";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
	#[serde(default, deserialize_with = "de_opt_text")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub email: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub course: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub year: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub college: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub phone: Option<String>,
	#[serde(default, deserialize_with = "de_opt_id")]
	pub event_id: Option<i64>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub event_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationQuery {
	pub email: Option<String>,
	pub event_id: Option<String>,
	pub id: Option<String>,
}

/// Validated registration input, before the event name is resolved
#[derive(Debug)]
pub struct ValidRegistration {
	pub name: String,
	pub email: String,
	pub course: String,
	pub year: String,
	pub college: String,
	pub phone: String,
	pub event_id: i64,
	pub event_name: Option<String>,
}

impl CreateRegistrationRequest {
	/// Checks required fields and sanitizes the rest. Nothing is persisted
	/// when this fails.
	pub fn validate(self) -> ClResult<ValidRegistration> {
		let name = self.name.as_deref().map(|n| sanitize(n, MAX_TEXT_LEN)).unwrap_or_default();
		let email = self.email.as_deref().map(str::trim).unwrap_or_default();
		let event_id = self.event_id.filter(|id| *id > 0);

		let Some(event_id) = event_id.filter(|_| !name.is_empty() && !email.is_empty()) else {
			return Err(Error::ValidationError("Missing required fields".into()));
		};
		if !is_valid_email(email) {
			return Err(Error::ValidationError("Invalid email format".into()));
		}

		Ok(ValidRegistration {
			name,
			email: normalize_email(&sanitize(email, MAX_TEXT_LEN)),
			course: sanitize_or(self.course.as_deref(), MAX_TEXT_LEN, NOT_SPECIFIED),
			year: sanitize_or(self.year.as_deref(), MAX_TEXT_LEN, NOT_SPECIFIED),
			college: sanitize_or(self.college.as_deref(), MAX_TEXT_LEN, NOT_SPECIFIED),
			phone: sanitize_or(self.phone.as_deref(), MAX_TEXT_LEN, NOT_PROVIDED),
			event_id,
			event_name: self
				.event_name
				.as_deref()
				.map(|n| sanitize(n, MAX_TEXT_LEN))
				.filter(|n| !n.is_empty()),
		})
	}
}

impl ValidRegistration {
	/// Finalizes the record. `current_event_name` is used when the client
	/// didn't send one.
	pub fn into_data(
		self,
		current_event_name: Option<&str>,
		registered_at: DateTime<Utc>,
	) -> RegistrationData {
		let event_name = self
			.event_name
			.or_else(|| current_event_name.map(|n| sanitize(n, MAX_TEXT_LEN)))
			.filter(|n| !n.is_empty())
			.unwrap_or_else(|| UNKNOWN_EVENT.to_string());

		RegistrationData {
			name: self.name,
			email: self.email,
			course: self.course,
			year: self.year,
			college: self.college,
			phone: self.phone,
			event_id: self.event_id,
			event_name,
			registered_at,
		}
	}
}


// vim: ts=4
