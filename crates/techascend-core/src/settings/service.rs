//! Settings service with defaults and validation

use std::sync::Arc;

use serde_json::Value;

use techascend_types::store_adapter::{SETTING_REGISTRATION_OPEN, Settings, StoreAdapter};

use crate::prelude::*;

#[derive(Debug)]
pub struct SettingsService {
	store: Arc<dyn StoreAdapter>,
}

impl SettingsService {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store }
	}

	fn with_defaults(mut settings: Settings) -> Settings {
		settings.entry(SETTING_REGISTRATION_OPEN).or_insert(Value::Bool(true));
		settings
	}

	/// Stored settings with defaults filled in
	pub async fn get(&self) -> ClResult<Settings> {
		Ok(Self::with_defaults(self.store.read_settings().await?))
	}

	/// Global registration toggle. A non-boolean stored value reads as open.
	pub async fn registration_open(&self) -> ClResult<bool> {
		let settings = self.store.read_settings().await?;
		Ok(settings.get(SETTING_REGISTRATION_OPEN).and_then(Value::as_bool).unwrap_or(true))
	}

	/// Shallow-merges an object over the stored settings
	pub async fn update(&self, patch: Value) -> ClResult<Settings> {
		let Value::Object(patch) = patch else {
			return Err(Error::ValidationError("Settings must be an object".into()));
		};
		if patch.get(SETTING_REGISTRATION_OPEN).is_some_and(|v| !v.is_boolean()) {
			return Err(Error::ValidationError("registrationOpen must be a boolean".into()));
		}

		let settings = self.store.update_settings(&patch).await?;
		debug!(keys = ?patch.keys().collect::<Vec<_>>(), "settings updated");
		Ok(Self::with_defaults(settings))
	}
}


// vim: ts=4
