//! Events collection (`events.json`)

use techascend::{
	prelude::*,
	store_adapter::{Event, EventData},
};

use crate::{EVENTS_FILE, StoreAdapterJson, file};

async fn load(store: &StoreAdapterJson) -> ClResult<Vec<Event>> {
	Ok(file::read_json(&store.path(EVENTS_FILE)).await?.unwrap_or_default())
}

async fn save(store: &StoreAdapterJson, events: &[Event]) -> ClResult<()> {
	file::write_json(&store.path(EVENTS_FILE), events).await
}

pub(crate) async fn list(store: &StoreAdapterJson) -> ClResult<Vec<Event>> {
	let mut events = load(store).await?;
	events.sort_by_key(|e| e.id);
	Ok(events)
}

pub(crate) async fn read(store: &StoreAdapterJson, event_id: i64) -> ClResult<Option<Event>> {
	Ok(load(store).await?.into_iter().find(|e| e.id == event_id))
}

pub(crate) async fn create(store: &StoreAdapterJson, id: i64, data: &EventData) -> ClResult<Event> {
	let mut events = load(store).await?;
	let event = Event { id, data: data.clone() };
	events.push(event.clone());
	save(store, &events).await?;
	info!(event_id = id, "event created");
	Ok(event)
}

pub(crate) async fn update(store: &StoreAdapterJson, event: &Event) -> ClResult<()> {
	let mut events = load(store).await?;
	let Some(slot) = events.iter_mut().find(|e| e.id == event.id) else {
		return Err(Error::NotFound("Event not found".into()));
	};
	*slot = event.clone();
	save(store, &events).await
}

pub(crate) async fn delete(store: &StoreAdapterJson, event_id: i64) -> ClResult<()> {
	let mut events = load(store).await?;
	let len = events.len();
	events.retain(|e| e.id != event_id);
	if events.len() == len {
		return Err(Error::NotFound("Event not found".into()));
	}
	save(store, &events).await
}

pub(crate) async fn import(store: &StoreAdapterJson, event: &Event) -> ClResult<()> {
	let mut events = load(store).await?;
	match events.iter_mut().find(|e| e.id == event.id) {
		Some(slot) => *slot = event.clone(),
		None => events.push(event.clone()),
	}
	save(store, &events).await
}

// vim: ts=4
