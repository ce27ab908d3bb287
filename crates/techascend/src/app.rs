//! App builder - constructs and runs the TechAscend application

use std::{path::Path, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::identity_provider::IdentityProvider;
use crate::prelude::*;
use crate::routes;
use crate::store_adapter::StoreAdapter;
pub use techascend_core::app::{App, AppOpts, AppState, VERSION};

pub struct AppBuilder {
	opts: AppOpts,
	store: Option<Arc<dyn StoreAdapter>>,
	identity_provider: Option<Arc<dyn IdentityProvider>>,
	admin_emails: Vec<String>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// A subscriber may already be installed (tests build many apps)
		let _ = tracing_subscriber::fmt()
			.with_env_filter(
				EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
			)
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppOpts::default(),
			store: None,
			identity_provider: None,
			admin_emails: Vec::new(),
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn migrate_from(&mut self, dir: impl Into<Box<Path>>) -> &mut Self {
		self.opts.migrate_from = Some(dir.into());
		self
	}
	pub fn cors_origins(
		&mut self,
		origins: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> &mut Self {
		self.opts.cors_origins = origins.into_iter().map(Into::into).collect();
		self
	}
	/// Seed for the admin list, used only when the store has none yet.
	/// The first entry becomes the super admin.
	pub fn admin_emails(&mut self, emails: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
		self.admin_emails = emails.into_iter().map(Into::into).collect();
		self
	}

	// Adapters
	pub fn store(&mut self, store: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store = Some(store);
		self
	}
	pub fn identity_provider(&mut self, identity_provider: Arc<dyn IdentityProvider>) -> &mut Self {
		self.identity_provider = Some(identity_provider);
		self
	}

	/// Creates the app state and seeds the admin list.
	pub async fn build(self) -> ClResult<App> {
		let Some(store) = self.store else {
			error!("FATAL: No store adapter configured");
			return Err(Error::Internal("No store adapter configured".to_string()));
		};
		let Some(identity_provider) = self.identity_provider else {
			error!("FATAL: No identity provider configured");
			return Err(Error::Internal("No identity provider configured".to_string()));
		};

		let app: App = Arc::new(AppState::new(self.opts, store, identity_provider));
		app.admins.init(&self.admin_emails).await.inspect_err(|err| {
			error!("FATAL: Cannot initialize admin list: {}", err);
		})?;

		Ok(app)
	}

	pub async fn run(self) -> ClResult<()> {
		info!("TechAscend event service V{}", VERSION);

		let app = self.build().await?;
		let router = routes::init(app.clone());

		let listener = TcpListener::bind(app.opts.listen.as_ref()).await.inspect_err(|err| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, err);
		})?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

		info!("Server stopped");
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = tokio::signal::ctrl_c().await {
			error!("Failed to install Ctrl+C handler: {}", err);
			std::future::pending::<()>().await;
		}
		info!("Received Ctrl+C, shutting down");
	};

	#[cfg(unix)]
	let terminate = async {
		use tokio::signal::unix::{SignalKind, signal};

		match signal(SignalKind::terminate()) {
			Ok(mut sig) => {
				sig.recv().await;
				info!("Received terminate signal, shutting down");
			}
			Err(err) => {
				error!("Failed to install signal handler: {}", err);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}
}

// vim: ts=4
