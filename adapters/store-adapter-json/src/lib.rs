//! Flat JSON file store.
//!
//! Every collection lives in its own file under the data directory, in the
//! layout of existing TechAscend data directories:
//!
//! - `events.json`: array of events
//! - `registrations.json`: array of registrations
//! - `admins.json`: `{ "superAdmin": ..., "admins": [...] }`
//! - `settings.json`: settings object
//! - `counters.json`: id high-water marks
//!
//! Writes replace the whole file (temp file, fsync, rename), so readers never
//! observe a torn file. Only id allocation is serialized within the process.
//! Collection files have no locking between writers, so concurrent
//! read-modify-write cycles can lose updates.

use std::{
	fmt::Debug,
	path::Path,
	sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::{fs::create_dir_all, sync::Mutex};

use techascend::{
	prelude::*,
	store_adapter::{
		AdminList, Event, EventData, ListRegistrationOptions, Registration, RegistrationData,
		Settings, StoreAdapter,
	},
};

mod admin;
mod event;
mod file;
mod registration;
mod setting;

use file::Counters;

const EVENTS_FILE: &str = "events.json";
const REGISTRATIONS_FILE: &str = "registrations.json";
const ADMINS_FILE: &str = "admins.json";
const SETTINGS_FILE: &str = "settings.json";
const COUNTERS_FILE: &str = "counters.json";

#[derive(Debug)]
pub struct StoreAdapterJson {
	base_dir: Box<Path>,
	next_event_id: AtomicI64,
	next_registration_id: AtomicI64,
	counters_lock: Mutex<()>,
}

impl StoreAdapterJson {
	pub async fn new(base_dir: impl AsRef<Path>) -> ClResult<Self> {
		let base_dir: Box<Path> = base_dir.as_ref().into();
		create_dir_all(&base_dir).await?;

		// Files written before counters existed only carry ids, so the
		// high-water mark is the larger of both.
		let counters: Counters =
			file::read_json(&base_dir.join(COUNTERS_FILE)).await?.unwrap_or_default();
		let events: Vec<Event> =
			file::read_json(&base_dir.join(EVENTS_FILE)).await?.unwrap_or_default();
		let registrations: Vec<Registration> =
			file::read_json(&base_dir.join(REGISTRATIONS_FILE)).await?.unwrap_or_default();

		let last_event_id = events.iter().map(|e| e.id).fold(counters.event, i64::max);
		let last_registration_id =
			registrations.iter().map(|r| r.id).fold(counters.registration, i64::max);

		info!(
			dir = %base_dir.display(),
			events = events.len(),
			registrations = registrations.len(),
			"JSON store opened"
		);

		Ok(Self {
			base_dir,
			next_event_id: AtomicI64::new(last_event_id + 1),
			next_registration_id: AtomicI64::new(last_registration_id + 1),
			counters_lock: Mutex::new(()),
		})
	}

	fn path(&self, name: &str) -> std::path::PathBuf {
		self.base_dir.join(name)
	}

	/// Reserves the next id and persists the new high-water mark
	///
	/// The stored mark never goes down: it is the highest id handed out so
	/// far, not the one reserved by this call.
	async fn next_id(&self, counter: &AtomicI64, set: fn(&mut Counters, i64)) -> ClResult<i64> {
		let _guard = self.counters_lock.lock().await;
		let id = counter.fetch_add(1, Ordering::SeqCst);
		let path = self.path(COUNTERS_FILE);
		let mut counters: Counters = file::read_json(&path).await?.unwrap_or_default();
		set(&mut counters, counter.load(Ordering::SeqCst) - 1);
		file::write_json(&path, &counters).await?;
		Ok(id)
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterJson {
	// Events
	//********
	async fn list_events(&self) -> ClResult<Vec<Event>> {
		event::list(self).await
	}

	async fn read_event(&self, event_id: i64) -> ClResult<Option<Event>> {
		event::read(self, event_id).await
	}

	async fn create_event(&self, data: &EventData) -> ClResult<Event> {
		let id = self
			.next_id(&self.next_event_id, |c, id| c.event = c.event.max(id))
			.await?;
		event::create(self, id, data).await
	}

	async fn update_event(&self, event: &Event) -> ClResult<()> {
		event::update(self, event).await
	}

	async fn delete_event(&self, event_id: i64) -> ClResult<()> {
		event::delete(self, event_id).await
	}

	async fn import_event(&self, event: &Event) -> ClResult<()> {
		self.next_event_id.fetch_max(event.id + 1, Ordering::SeqCst);
		event::import(self, event).await
	}

	// Registrations
	//***************
	async fn list_registrations(
		&self,
		opts: &ListRegistrationOptions<'_>,
	) -> ClResult<Vec<Registration>> {
		registration::list(self, opts).await
	}

	async fn create_registration(&self, data: &RegistrationData) -> ClResult<Registration> {
		registration::check_unique(self, data).await?;
		let id = self
			.next_id(&self.next_registration_id, |c, id| c.registration = c.registration.max(id))
			.await?;
		registration::create(self, id, data).await
	}

	async fn delete_registration(&self, registration_id: i64) -> ClResult<()> {
		registration::delete(self, registration_id).await
	}

	async fn import_registration(&self, registration: &Registration) -> ClResult<()> {
		self.next_registration_id.fetch_max(registration.id + 1, Ordering::SeqCst);
		registration::import(self, registration).await
	}

	// Admins
	//********
	async fn read_admins(&self) -> ClResult<Option<AdminList>> {
		admin::read(self).await
	}

	async fn init_admins(&self, admins: &AdminList) -> ClResult<()> {
		admin::write(self, admins).await
	}

	async fn add_admin(&self, email: &str) -> ClResult<AdminList> {
		admin::add(self, email).await
	}

	async fn remove_admin(&self, email: &str) -> ClResult<AdminList> {
		admin::remove(self, email).await
	}

	// Settings
	//**********
	async fn read_settings(&self) -> ClResult<Settings> {
		setting::read(self).await
	}

	async fn update_settings(&self, patch: &Settings) -> ClResult<Settings> {
		setting::update(self, patch).await
	}
}

// vim: ts=4
