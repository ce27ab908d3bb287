//! Registrations collection (`registrations.json`)

use techascend::{
	prelude::*,
	store_adapter::{ListRegistrationOptions, Registration, RegistrationData},
	utils::email_eq,
};

use crate::{REGISTRATIONS_FILE, StoreAdapterJson, file};

async fn load(store: &StoreAdapterJson) -> ClResult<Vec<Registration>> {
	Ok(file::read_json(&store.path(REGISTRATIONS_FILE)).await?.unwrap_or_default())
}

async fn save(store: &StoreAdapterJson, registrations: &[Registration]) -> ClResult<()> {
	file::write_json(&store.path(REGISTRATIONS_FILE), registrations).await
}

pub(crate) async fn list(
	store: &StoreAdapterJson,
	opts: &ListRegistrationOptions<'_>,
) -> ClResult<Vec<Registration>> {
	Ok(load(store)
		.await?
		.into_iter()
		.filter(|r| opts.email.is_none_or(|email| email_eq(&r.data.email, email)))
		.filter(|r| opts.event_id.is_none_or(|event_id| r.data.event_id == event_id))
		.collect())
}

/// Duplicate check ahead of id allocation. Not atomic with the write.
pub(crate) async fn check_unique(store: &StoreAdapterJson, data: &RegistrationData) -> ClResult<()> {
	let exists = load(store)
		.await?
		.iter()
		.any(|r| r.data.event_id == data.event_id && email_eq(&r.data.email, &data.email));
	if exists {
		return Err(Error::AlreadyRegistered);
	}
	Ok(())
}

pub(crate) async fn create(
	store: &StoreAdapterJson,
	id: i64,
	data: &RegistrationData,
) -> ClResult<Registration> {
	let mut registrations = load(store).await?;
	let registration = Registration { id, data: data.clone() };
	registrations.push(registration.clone());
	save(store, &registrations).await?;
	info!(registration_id = id, event_id = data.event_id, "registration created");
	Ok(registration)
}

pub(crate) async fn delete(store: &StoreAdapterJson, registration_id: i64) -> ClResult<()> {
	let mut registrations = load(store).await?;
	let len = registrations.len();
	registrations.retain(|r| r.id != registration_id);
	if registrations.len() == len {
		return Err(Error::NotFound("Registration not found".into()));
	}
	save(store, &registrations).await
}

pub(crate) async fn import(store: &StoreAdapterJson, registration: &Registration) -> ClResult<()> {
	let mut registrations = load(store).await?;
	let data = &registration.data;
	if registrations.iter().any(|r| {
		r.id != registration.id
			&& r.data.event_id == data.event_id
			&& email_eq(&r.data.email, &data.email)
	}) {
		return Err(Error::AlreadyRegistered);
	}
	match registrations.iter_mut().find(|r| r.id == registration.id) {
		Some(slot) => *slot = registration.clone(),
		None => registrations.push(registration.clone()),
	}
	save(store, &registrations).await
}

// vim: ts=4
