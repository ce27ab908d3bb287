//! Settings object (`settings.json`)

use techascend::{prelude::*, store_adapter::Settings};

use crate::{SETTINGS_FILE, StoreAdapterJson, file};

pub(crate) async fn read(store: &StoreAdapterJson) -> ClResult<Settings> {
	Ok(file::read_json(&store.path(SETTINGS_FILE)).await?.unwrap_or_default())
}

pub(crate) async fn update(store: &StoreAdapterJson, patch: &Settings) -> ClResult<Settings> {
	let mut settings = read(store).await?;
	for (name, value) in patch {
		settings.insert(name.clone(), value.clone());
	}
	file::write_json(&store.path(SETTINGS_FILE), &settings).await?;
	Ok(settings)
}

// vim: ts=4
