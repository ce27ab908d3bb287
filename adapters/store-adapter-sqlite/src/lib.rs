//! SQLite store.
//!
//! Events and registrations use AUTOINCREMENT keys, so ids are never reused.
//! Duplicate registrations are rejected by a unique `(email, event_id)` index.

use std::{fmt::Debug, path::Path};

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use techascend::{
	prelude::*,
	store_adapter::{
		AdminList, Event, EventData, ListRegistrationOptions, Registration, RegistrationData,
		Settings, StoreAdapter,
	},
};

mod admin;
mod event;
mod registration;
mod schema;
mod setting;
mod utils;

use schema::init_db;
use utils::inspect;

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ClResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;
		info!(path = %path.display(), "SQLite store opened");

		Ok(Self { db })
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	// Events
	//********
	async fn list_events(&self) -> ClResult<Vec<Event>> {
		event::list(&self.db).await
	}

	async fn read_event(&self, event_id: i64) -> ClResult<Option<Event>> {
		event::read(&self.db, event_id).await
	}

	async fn create_event(&self, data: &EventData) -> ClResult<Event> {
		event::create(&self.db, data).await
	}

	async fn update_event(&self, event: &Event) -> ClResult<()> {
		event::update(&self.db, event).await
	}

	async fn delete_event(&self, event_id: i64) -> ClResult<()> {
		event::delete(&self.db, event_id).await
	}

	async fn import_event(&self, event: &Event) -> ClResult<()> {
		event::import(&self.db, event).await
	}

	// Registrations
	//***************
	async fn list_registrations(
		&self,
		opts: &ListRegistrationOptions<'_>,
	) -> ClResult<Vec<Registration>> {
		registration::list(&self.db, opts).await
	}

	async fn create_registration(&self, data: &RegistrationData) -> ClResult<Registration> {
		registration::create(&self.db, data).await
	}

	async fn delete_registration(&self, registration_id: i64) -> ClResult<()> {
		registration::delete(&self.db, registration_id).await
	}

	async fn import_registration(&self, registration: &Registration) -> ClResult<()> {
		registration::import(&self.db, registration).await
	}

	// Admins
	//********
	async fn read_admins(&self) -> ClResult<Option<AdminList>> {
		admin::read(&self.db).await
	}

	async fn init_admins(&self, admins: &AdminList) -> ClResult<()> {
		admin::init(&self.db, admins).await
	}

	async fn add_admin(&self, email: &str) -> ClResult<AdminList> {
		admin::add(&self.db, email).await
	}

	async fn remove_admin(&self, email: &str) -> ClResult<AdminList> {
		admin::remove(&self.db, email).await
	}

	// Settings
	//**********
	async fn read_settings(&self) -> ClResult<Settings> {
		setting::read(&self.db).await
	}

	async fn update_settings(&self, patch: &Settings) -> ClResult<Settings> {
		setting::update(&self.db, patch).await
	}
}

// vim: ts=4
