//! Test app builders

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use axum::Router;
use tempfile::TempDir;

use techascend::prelude::*;
use techascend::identity_provider::{Identity, IdentityProvider};
use techascend::store_adapter::StoreAdapter;
use techascend::{App, AppBuilder, routes};
use techascend_store_adapter_json::StoreAdapterJson;
use techascend_store_adapter_sqlite::StoreAdapterSqlite;

pub const SUPER_ADMIN: &str = "root@techascend.dev";
pub const ADMIN: &str = "ops@techascend.dev";

pub const SUPER_ADMIN_TOKEN: &str = "root-token";
pub const ADMIN_TOKEN: &str = "ops-token";
pub const USER_TOKEN: &str = "alice-token";
pub const NO_EMAIL_TOKEN: &str = "anon-token";

/// Resolves a handful of fixed tokens
#[derive(Debug)]
pub struct TestIdentities;

#[async_trait]
impl IdentityProvider for TestIdentities {
	async fn resolve_token(&self, token: &str) -> ClResult<Option<Identity>> {
		Ok(match token {
			SUPER_ADMIN_TOKEN => Some(Identity::new("user_root", Some(SUPER_ADMIN))),
			ADMIN_TOKEN => Some(Identity::new("user_ops", Some("Ops@TechAscend.dev"))),
			USER_TOKEN => Some(Identity::new("user_alice", Some("alice@x.com"))),
			NO_EMAIL_TOKEN => Some(Identity::new("user_phone", None)),
			_ => None,
		})
	}
}

pub struct TestApp {
	pub app: App,
	pub router: Router,
	pub temp_dir: TempDir,
}

async fn build_app(
	store: Arc<dyn StoreAdapter>,
	temp_dir: TempDir,
	migrate_from: Option<&Path>,
) -> TestApp {
	let mut builder = AppBuilder::new();
	builder
		.store(store)
		.identity_provider(Arc::new(TestIdentities))
		.admin_emails([SUPER_ADMIN, ADMIN]);
	if let Some(dir) = migrate_from {
		builder.migrate_from(dir);
	}
	let app = builder.build().await.expect("Failed to build app");
	let router = routes::init(app.clone());
	TestApp { app, router, temp_dir }
}

pub async fn create_json_app() -> TestApp {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store =
		StoreAdapterJson::new(temp_dir.path().join("data")).await.expect("Failed to create store");
	build_app(Arc::new(store), temp_dir, None).await
}

pub async fn create_sqlite_app() -> TestApp {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = StoreAdapterSqlite::new(temp_dir.path().join("techascend.db"))
		.await
		.expect("Failed to create store");
	build_app(Arc::new(store), temp_dir, None).await
}

/// SQLite app with a JSON data directory configured as migration source
pub async fn create_migrating_app() -> TestApp {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = StoreAdapterSqlite::new(temp_dir.path().join("techascend.db"))
		.await
		.expect("Failed to create store");
	let source = temp_dir.path().join("legacy");
	build_app(Arc::new(store), temp_dir, Some(&source)).await
}

// vim: ts=4
