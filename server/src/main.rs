//! TechAscend event service

use std::{process::ExitCode, sync::Arc};

use techascend::AppBuilder;
use techascend::auth::JwtIdentityProvider;
use techascend::prelude::*;
use techascend::store_adapter::StoreAdapter;
use techascend_store_adapter_json::StoreAdapterJson;
use techascend_store_adapter_sqlite::StoreAdapterSqlite;

mod config;

use config::{Config, SQLITE_FILE, StoreKind};

async fn open_store(config: &Config) -> ClResult<Arc<dyn StoreAdapter>> {
	Ok(match config.store {
		StoreKind::Json => Arc::new(StoreAdapterJson::new(&config.data_dir).await?),
		StoreKind::Sqlite => {
			Arc::new(StoreAdapterSqlite::new(config.data_dir.join(SQLITE_FILE)).await?)
		}
	})
}

async fn run(mut builder: AppBuilder) -> ClResult<()> {
	let config = Config::load().await?;
	info!(store = ?config.store, data_dir = %config.data_dir.display(), "opening store");

	builder
		.listen(config.listen.as_str())
		.store(open_store(&config).await?)
		.identity_provider(Arc::new(JwtIdentityProvider::new(&config.jwt)?))
		.admin_emails(config.admin_emails)
		.cors_origins(config.cors_origins);
	if let Some(dir) = config.migrate_from {
		builder.migrate_from(dir);
	}

	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	// Installs the log subscriber, so it comes before config loading
	let builder = AppBuilder::new();

	match run(builder).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
