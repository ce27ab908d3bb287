//! Common types used throughout the service.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::prelude::*;

// Patch //
//*******//
/// Tri-state field for partial updates.
///
/// A missing field deserializes to `Undefined` (with `#[serde(default)]`),
/// an explicit `null` to `Null`, anything else to `Value`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
	#[default]
	Undefined,
	Null,
	Value(T),
}

impl<T> Patch<T> {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Patch::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Patch::Null)
	}

	pub fn is_value(&self) -> bool {
		matches!(self, Patch::Value(_))
	}

	pub fn value(&self) -> Option<&T> {
		match self {
			Patch::Value(v) => Some(v),
			_ => None,
		}
	}

	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
		match self {
			Patch::Undefined => Patch::Undefined,
			Patch::Null => Patch::Null,
			Patch::Value(v) => Patch::Value(f(v)),
		}
	}
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
	T: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match Option::<T>::deserialize(deserializer)? {
			Some(v) => Patch::Value(v),
			None => Patch::Null,
		})
	}
}

impl<T> Serialize for Patch<T>
where
	T: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Patch::Value(v) => v.serialize(serializer),
			Patch::Undefined | Patch::Null => serializer.serialize_none(),
		}
	}
}

// Responses //
//***********//
/// `{ "success": true }` body for operations with nothing else to return
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SuccessResponse {
	pub success: bool,
}

impl SuccessResponse {
	pub fn ok() -> Self {
		Self { success: true }
	}
}

// Timestamps //
//************//
pub fn now() -> DateTime<Utc> {
	Utc::now()
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
	ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a deadline as entered by the admin UI.
///
/// Accepts RFC 3339, `datetime-local` values (`YYYY-MM-DDTHH:MM[:SS]`, taken
/// as UTC) and plain dates. An empty string means "no deadline".
pub fn parse_timestamp(value: &str) -> ClResult<Option<DateTime<Utc>>> {
	let value = value.trim();
	if value.is_empty() {
		return Ok(None);
	}

	if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
		return Ok(Some(ts.with_timezone(&Utc)));
	}
	for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
		if let Ok(ts) = NaiveDateTime::parse_from_str(value, fmt) {
			return Ok(Some(ts.and_utc()));
		}
	}
	if let Some(ts) =
		NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
	{
		return Ok(Some(ts.and_utc()));
	}

	Err(Error::ValidationError(format!("Invalid deadline: {}", value)))
}

/// Serde helpers for optional deadlines stored as ISO strings.
///
/// Unparseable stored values read back as "no deadline".
pub mod deadline {
	use chrono::{DateTime, Utc};
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(ts) => serializer.serialize_str(&super::format_timestamp(ts)),
			None => serializer.serialize_none(),
		}
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = Option::<String>::deserialize(deserializer)?;
		Ok(raw.as_deref().and_then(|s| super::parse_timestamp(s).ok().flatten()))
	}
}


// vim: ts=4
