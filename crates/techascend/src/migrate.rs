//! Import from a JSON data directory
//!
//! Copies events, registrations, admins and settings from a flat-file data
//! directory into the active store. Events and registrations keep their ids
//! (upsert by id), admins are added by email, settings are merged by key.
//! A registration whose (email, event) pair is already held by another id is
//! skipped and not counted. Running it twice is harmless.

use axum::{Json, extract::State};
use serde::Serialize;

use techascend_core::extract::Auth;
use techascend_store_adapter_json::StoreAdapterJson;

use crate::prelude::*;
use crate::store_adapter::{ListRegistrationOptions, StoreAdapter};
use crate::utils::normalize_email;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MigrationCounts {
	pub events: usize,
	pub registrations: usize,
	pub admins: usize,
	pub settings: usize,
}

#[derive(Serialize)]
pub struct MigrateResponse {
	pub success: bool,
	pub migrated: MigrationCounts,
}

pub async fn migrate(
	source: &dyn StoreAdapter,
	target: &dyn StoreAdapter,
) -> ClResult<MigrationCounts> {
	let mut counts = MigrationCounts::default();

	let events = source.list_events().await?;
	for event in &events {
		target.import_event(event).await?;
	}
	counts.events = events.len();

	let registrations = source.list_registrations(&ListRegistrationOptions::default()).await?;
	for registration in &registrations {
		match target.import_registration(registration).await {
			Ok(()) => counts.registrations += 1,
			Err(Error::AlreadyRegistered) => {
				warn!(
					registration_id = registration.id,
					event_id = registration.data.event_id,
					"skipping duplicate registration"
				);
			}
			Err(err) => return Err(err),
		}
	}

	if let Some(list) = source.read_admins().await? {
		for email in list.admins.iter().map(|e| normalize_email(e)).filter(|e| !e.is_empty()) {
			match target.add_admin(&email).await {
				Ok(_) | Err(Error::Conflict(_)) => {}
				Err(err) => return Err(err),
			}
		}
		counts.admins = list.admins.len();
	}

	let settings = source.read_settings().await?;
	if !settings.is_empty() {
		target.update_settings(&settings).await?;
	}
	counts.settings = settings.len();

	Ok(counts)
}

/// GET /api/migrate - admin only
pub async fn get_migrate(
	State(app): State<App>,
	Auth(admin): Auth,
) -> ClResult<Json<MigrateResponse>> {
	let Some(source_dir) = app.opts.migrate_from.as_deref() else {
		return Err(Error::NotFound("No migration source configured".into()));
	};
	if !tokio::fs::try_exists(source_dir).await? {
		warn!(dir = %source_dir.display(), "migration source missing");
		return Err(Error::NotFound("Migration source not found".into()));
	}

	info!(admin = %admin.id, dir = %source_dir.display(), "migration started");
	let source = StoreAdapterJson::new(source_dir).await?;
	let migrated = migrate(&source, app.store.as_ref()).await.inspect_err(|err| {
		error!("Migration failed: {}", err);
	})?;
	info!(
		events = migrated.events,
		registrations = migrated.registrations,
		admins = migrated.admins,
		settings = migrated.settings,
		"migration finished"
	);

	Ok(Json(MigrateResponse { success: true, migrated }))
}

// vim: ts=4
