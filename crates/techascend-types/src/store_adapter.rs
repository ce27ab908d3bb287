//! Adapter that stores events, registrations, the admin list and settings.
//!
//! Implementations are expected to be whole-operation atomic from the
//! caller's point of view: an operation either fully applies or returns an
//! error. Whether concurrent writers are serialized is up to the backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// Settings key of the global registration toggle
pub const SETTING_REGISTRATION_OPEN: &str = "registrationOpen";

/// Named flags, shallow-merged on update
pub type Settings = serde_json::Map<String, serde_json::Value>;

// Events //
//********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventMode {
	Online,
	#[default]
	Offline,
	Hybrid,
}

impl EventMode {
	pub fn as_str(self) -> &'static str {
		match self {
			EventMode::Online => "Online",
			EventMode::Offline => "Offline",
			EventMode::Hybrid => "Hybrid",
		}
	}
}

impl std::str::FromStr for EventMode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Online" => Ok(EventMode::Online),
			"Offline" => Ok(EventMode::Offline),
			"Hybrid" => Ok(EventMode::Hybrid),
			other => Err(Error::ValidationError(format!("Invalid event mode: {}", other))),
		}
	}
}

pub const DEFAULT_EVENT_NAME: &str = "New Event";
pub const DEFAULT_EVENT_IMAGE: &str = "📅";
pub const DEFAULT_TEAM_SIZE: &str = "Individual";

fn default_image() -> String {
	DEFAULT_EVENT_IMAGE.to_string()
}

fn default_team_size() -> String {
	DEFAULT_TEAM_SIZE.to_string()
}

fn default_true() -> bool {
	true
}

/// Everything about an event except its id
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub tagline: String,
	#[serde(default)]
	pub description: String,
	/// Emoji glyph or encoded image
	#[serde(default = "default_image")]
	pub image: String,
	#[serde(default)]
	pub image_path: Option<String>,
	#[serde(default)]
	pub date: String,
	#[serde(default)]
	pub time: String,
	#[serde(default)]
	pub duration: String,
	#[serde(default)]
	pub mode: EventMode,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub category: String,
	#[serde(default = "default_team_size")]
	pub team_size: String,
	/// Display string only, see `deadline` for the comparable value
	#[serde(default)]
	pub registration_deadline: String,
	#[serde(default, with = "crate::types::deadline")]
	pub deadline: Option<DateTime<Utc>>,
	#[serde(default = "default_true")]
	pub registration_open: bool,
	#[serde(default)]
	pub prizes: Vec<String>,
	#[serde(default)]
	pub requirements: Vec<String>,
	#[serde(default)]
	pub highlights: Vec<String>,
}

impl Default for EventData {
	fn default() -> Self {
		Self {
			name: DEFAULT_EVENT_NAME.to_string(),
			tagline: String::new(),
			description: String::new(),
			image: default_image(),
			image_path: None,
			date: String::new(),
			time: String::new(),
			duration: String::new(),
			mode: EventMode::default(),
			location: String::new(),
			category: String::new(),
			team_size: default_team_size(),
			registration_deadline: String::new(),
			deadline: None,
			registration_open: true,
			prizes: Vec::new(),
			requirements: Vec::new(),
			highlights: Vec::new(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
	pub id: i64,
	#[serde(flatten)]
	pub data: EventData,
}

// Registrations //
//***************//
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
	pub name: String,
	pub email: String,
	pub course: String,
	pub year: String,
	pub college: String,
	pub phone: String,
	pub event_id: i64,
	/// Snapshot of the event name at registration time
	pub event_name: String,
	pub registered_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
	pub id: i64,
	#[serde(flatten)]
	pub data: RegistrationData,
}

#[derive(Debug, Default)]
pub struct ListRegistrationOptions<'a> {
	/// Normalized (lower-case) email
	pub email: Option<&'a str>,
	pub event_id: Option<i64>,
}

// Admins //
//********//
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminList {
	/// Protected admin, empty when none was configured
	#[serde(default)]
	pub super_admin: String,
	#[serde(default)]
	pub admins: Vec<String>,
}

#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	// Events
	//********
	/// Lists all events in id order
	async fn list_events(&self) -> ClResult<Vec<Event>>;
	async fn read_event(&self, event_id: i64) -> ClResult<Option<Event>>;
	/// Creates an event, assigning an id greater than any id ever assigned
	async fn create_event(&self, data: &EventData) -> ClResult<Event>;
	/// Replaces a stored event. Fails with `NotFound` if the id is absent.
	async fn update_event(&self, event: &Event) -> ClResult<()>;
	async fn delete_event(&self, event_id: i64) -> ClResult<()>;
	/// Inserts or replaces an event keeping its id
	async fn import_event(&self, event: &Event) -> ClResult<()>;

	// Registrations
	//***************
	async fn list_registrations(
		&self,
		opts: &ListRegistrationOptions<'_>,
	) -> ClResult<Vec<Registration>>;
	/// Fails with `AlreadyRegistered` if the (email, event) pair exists
	async fn create_registration(&self, data: &RegistrationData) -> ClResult<Registration>;
	async fn delete_registration(&self, registration_id: i64) -> ClResult<()>;
	/// Inserts or replaces a registration keeping its id. Fails with
	/// `AlreadyRegistered` if another registration holds the (email, event) pair.
	async fn import_registration(&self, registration: &Registration) -> ClResult<()>;

	// Admins
	//********
	/// Returns `None` if the admin list was never initialized
	async fn read_admins(&self) -> ClResult<Option<AdminList>>;
	async fn init_admins(&self, admins: &AdminList) -> ClResult<()>;
	/// Appends a normalized email. Fails with `Conflict` if present.
	async fn add_admin(&self, email: &str) -> ClResult<AdminList>;
	/// Removes a normalized email. Fails with `NotFound` if absent.
	async fn remove_admin(&self, email: &str) -> ClResult<AdminList>;

	// Settings
	//**********
	/// Returns the stored settings (empty if none were written yet)
	async fn read_settings(&self) -> ClResult<Settings>;
	/// Shallow-merges `patch` over the stored settings and returns the result
	async fn update_settings(&self, patch: &Settings) -> ClResult<Settings>;
}


// vim: ts=4
