//! Event request and response types, and input sanitization

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techascend_types::store_adapter::{
	DEFAULT_EVENT_IMAGE, DEFAULT_EVENT_NAME, DEFAULT_TEAM_SIZE, Event, EventData, EventMode,
};
use techascend_types::types::parse_timestamp;
use techascend_types::utils::{de_opt_id, de_opt_text, sanitize};

use crate::prelude::*;
use crate::status::{RegistrationStatus, registration_status};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_TAGLINE_LEN: usize = 200;
const MAX_FIELD_LEN: usize = 500;

// Views //
//*******//
/// Event as served to clients, with the derived status attached
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
	#[serde(flatten)]
	pub event: Event,
	pub registration_status: RegistrationStatus,
}

impl EventView {
	pub fn new(event: Event, global_open: bool, now: DateTime<Utc>) -> Self {
		let registration_status = registration_status(global_open, &event.data, now);
		Self { event, registration_status }
	}
}

// Requests //
//**********//
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
	#[serde(default, deserialize_with = "de_opt_text")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub tagline: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub image: Option<String>,
	#[serde(default)]
	pub image_path: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub date: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub time: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub duration: Option<String>,
	#[serde(default)]
	pub mode: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub location: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub category: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub team_size: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub registration_deadline: Option<String>,
	#[serde(default)]
	pub deadline: Option<String>,
	#[serde(default)]
	pub registration_open: Option<bool>,
	#[serde(default)]
	pub prizes: Option<Vec<String>>,
	#[serde(default)]
	pub requirements: Option<Vec<String>>,
	#[serde(default)]
	pub highlights: Option<Vec<String>>,
}

/// Partial update. Absent fields keep their stored value; `deadline` and
/// `imagePath` may be cleared with `null` (or `""`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
	#[serde(default, deserialize_with = "de_opt_id")]
	pub id: Option<i64>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub name: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub tagline: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub image: Option<String>,
	#[serde(default)]
	pub image_path: Patch<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub date: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub time: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub duration: Option<String>,
	#[serde(default)]
	pub mode: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub location: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub category: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub team_size: Option<String>,
	#[serde(default, deserialize_with = "de_opt_text")]
	pub registration_deadline: Option<String>,
	#[serde(default)]
	pub deadline: Patch<String>,
	#[serde(default)]
	pub registration_open: Option<bool>,
	#[serde(default)]
	pub prizes: Option<Vec<String>>,
	#[serde(default)]
	pub requirements: Option<Vec<String>>,
	#[serde(default)]
	pub highlights: Option<Vec<String>>,
}

// Sanitization //
//**************//
fn text(value: Option<String>, max_chars: usize) -> String {
	value.as_deref().map(|v| sanitize(v, max_chars)).unwrap_or_default()
}

fn text_or(value: Option<String>, max_chars: usize, fallback: &str) -> String {
	let res = text(value, max_chars);
	if res.is_empty() { fallback.to_string() } else { res }
}

fn description(value: &str) -> String {
	value.trim().to_string()
}

fn list(items: Vec<String>) -> Vec<String> {
	items.iter().map(|i| sanitize(i, MAX_FIELD_LEN)).filter(|i| !i.is_empty()).collect()
}

fn mode(value: Option<&str>) -> ClResult<Option<EventMode>> {
	match value.map(str::trim) {
		None | Some("") => Ok(None),
		Some(mode) => mode.parse().map(Some),
	}
}

fn image_path(value: Option<String>) -> Option<String> {
	value.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}

/// Builds the data of a new event, filling defaults for anything missing
pub fn build_event(req: CreateEventRequest) -> ClResult<EventData> {
	Ok(EventData {
		name: text_or(req.name, MAX_NAME_LEN, DEFAULT_EVENT_NAME),
		tagline: text(req.tagline, MAX_TAGLINE_LEN),
		description: req.description.as_deref().map(description).unwrap_or_default(),
		image: req.image.filter(|i| !i.trim().is_empty()).unwrap_or_else(|| DEFAULT_EVENT_IMAGE.into()),
		image_path: image_path(req.image_path),
		date: text(req.date, MAX_FIELD_LEN),
		time: text(req.time, MAX_FIELD_LEN),
		duration: text(req.duration, MAX_FIELD_LEN),
		mode: mode(req.mode.as_deref())?.unwrap_or_default(),
		location: text(req.location, MAX_FIELD_LEN),
		category: text(req.category, MAX_FIELD_LEN),
		team_size: text_or(req.team_size, MAX_FIELD_LEN, DEFAULT_TEAM_SIZE),
		registration_deadline: text(req.registration_deadline, MAX_FIELD_LEN),
		deadline: match req.deadline {
			Some(deadline) => parse_timestamp(&deadline)?,
			None => None,
		},
		registration_open: req.registration_open.unwrap_or(true),
		prizes: req.prizes.map(list).unwrap_or_default(),
		requirements: req.requirements.map(list).unwrap_or_default(),
		highlights: req.highlights.map(list).unwrap_or_default(),
	})
}

/// Applies a partial update in place. Validation happens before any field is
/// touched, so a rejected update leaves `data` unchanged.
pub fn apply_update(data: &mut EventData, req: UpdateEventRequest) -> ClResult<()> {
	let new_mode = mode(req.mode.as_deref())?;
	let new_deadline = match &req.deadline {
		Patch::Undefined => None,
		Patch::Null => Some(None),
		Patch::Value(deadline) => Some(parse_timestamp(deadline)?),
	};
	let new_name = req.name.as_deref().map(|n| sanitize(n, MAX_NAME_LEN));
	if new_name.as_deref() == Some("") {
		return Err(Error::ValidationError("Event name cannot be empty".into()));
	}

	if let Some(name) = new_name {
		data.name = name;
	}
	if let Some(tagline) = req.tagline {
		data.tagline = sanitize(&tagline, MAX_TAGLINE_LEN);
	}
	if let Some(desc) = req.description {
		data.description = description(&desc);
	}
	if let Some(image) = req.image.filter(|i| !i.trim().is_empty()) {
		data.image = image;
	}
	match req.image_path {
		Patch::Undefined => (),
		Patch::Null => data.image_path = None,
		Patch::Value(path) => data.image_path = image_path(Some(path)),
	}
	for (slot, value) in [
		(&mut data.date, req.date),
		(&mut data.time, req.time),
		(&mut data.duration, req.duration),
		(&mut data.location, req.location),
		(&mut data.category, req.category),
		(&mut data.registration_deadline, req.registration_deadline),
	] {
		if let Some(value) = value {
			*slot = sanitize(&value, MAX_FIELD_LEN);
		}
	}
	if let Some(team_size) = req.team_size {
		data.team_size = text_or(Some(team_size), MAX_FIELD_LEN, DEFAULT_TEAM_SIZE);
	}
	if let Some(mode) = new_mode {
		data.mode = mode;
	}
	if let Some(deadline) = new_deadline {
		data.deadline = deadline;
	}
	if let Some(open) = req.registration_open {
		data.registration_open = open;
	}
	if let Some(prizes) = req.prizes {
		data.prizes = list(prizes);
	}
	if let Some(requirements) = req.requirements {
		data.requirements = list(requirements);
	}
	if let Some(highlights) = req.highlights {
		data.highlights = list(highlights);
	}

	Ok(())
}


// vim: ts=4
