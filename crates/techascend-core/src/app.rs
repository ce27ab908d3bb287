//! App state type

use std::{path::Path, sync::Arc};

use techascend_types::identity_provider::IdentityProvider;
use techascend_types::store_adapter::StoreAdapter;

use crate::admin_registry::AdminRegistry;
use crate::settings::service::SettingsService;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
pub struct AppOpts {
	pub listen: Box<str>,
	/// JSON data directory served by `GET /api/migrate`
	pub migrate_from: Option<Box<Path>>,
	/// Allowed CORS origins, empty means same-origin only
	pub cors_origins: Box<[Box<str>]>,
}

impl Default for AppOpts {
	fn default() -> Self {
		Self { listen: "127.0.0.1:3000".into(), migrate_from: None, cors_origins: Box::new([]) }
	}
}

#[derive(Debug)]
pub struct AppState {
	pub opts: AppOpts,

	pub store: Arc<dyn StoreAdapter>,
	pub identity_provider: Arc<dyn IdentityProvider>,

	pub admins: AdminRegistry,
	pub settings: SettingsService,
}

impl AppState {
	pub fn new(
		opts: AppOpts,
		store: Arc<dyn StoreAdapter>,
		identity_provider: Arc<dyn IdentityProvider>,
	) -> Self {
		Self {
			opts,
			admins: AdminRegistry::new(Arc::clone(&store)),
			settings: SettingsService::new(Arc::clone(&store)),
			store,
			identity_provider,
		}
	}
}

pub type App = Arc<AppState>;

// vim: ts=4
