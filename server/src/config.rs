//! Environment configuration
//!
//! | Variable                   | Default          |
//! |----------------------------|------------------|
//! | `LISTEN`                   | `127.0.0.1:3000` |
//! | `DATA_DIR`                 | `./data`         |
//! | `STORE`                    | `json`           |
//! | `ADMIN_EMAILS`             | (none)           |
//! | `AUTH_JWT_SECRET`          | (none)           |
//! | `AUTH_JWT_PUBLIC_KEY_FILE` | (none)           |
//! | `AUTH_JWT_ISSUER`          | (none)           |
//! | `AUTH_JWT_AUDIENCE`        | (none)           |
//! | `MIGRATE_FROM`             | (none)           |
//! | `CORS_ORIGINS`             | (none)           |
//!
//! One of the two `AUTH_JWT_*` keys is required. When both are set the
//! public key wins.

use std::{env, path::PathBuf};

use techascend::auth::{JwtConfig, JwtKey};
use techascend::prelude::*;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const SQLITE_FILE: &str = "techascend.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
	Json,
	Sqlite,
}

#[derive(Debug)]
pub struct Config {
	pub listen: String,
	pub data_dir: PathBuf,
	pub store: StoreKind,
	pub admin_emails: Vec<String>,
	pub jwt: JwtConfig,
	pub migrate_from: Option<PathBuf>,
	pub cors_origins: Vec<String>,
}

fn list(value: Option<String>) -> Vec<String> {
	value
		.unwrap_or_default()
		.split(',')
		.map(str::trim)
		.filter(|v| !v.is_empty())
		.map(ToString::to_string)
		.collect()
}

impl Config {
	pub async fn load() -> ClResult<Self> {
		Self::from_vars(|key| env::var(key).ok().filter(|v| !v.trim().is_empty())).await
	}

	/// `var` returns the raw value of a variable, `None` when unset
	pub async fn from_vars(var: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let listen = var("LISTEN").unwrap_or_else(|| {
			info!("LISTEN not set, using default: {}", DEFAULT_LISTEN);
			DEFAULT_LISTEN.to_string()
		});
		let data_dir = PathBuf::from(var("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into()));

		let store = match var("STORE").as_deref().map(str::trim) {
			None | Some("json") => StoreKind::Json,
			Some("sqlite") => StoreKind::Sqlite,
			Some(other) => {
				return Err(Error::ValidationError(format!(
					"Invalid STORE value: {} (expected json or sqlite)",
					other
				)));
			}
		};

		let admin_emails = list(var("ADMIN_EMAILS"));
		if admin_emails.is_empty() {
			warn!("ADMIN_EMAILS not set");
		}

		let key = if let Some(path) = var("AUTH_JWT_PUBLIC_KEY_FILE") {
			let pem = tokio::fs::read(&path).await.inspect_err(|err| {
				error!("Cannot read AUTH_JWT_PUBLIC_KEY_FILE {}: {}", path, err);
			})?;
			JwtKey::RsaPem(pem.into())
		} else if let Some(secret) = var("AUTH_JWT_SECRET") {
			JwtKey::Secret(secret.into())
		} else {
			return Err(Error::ValidationError(
				"AUTH_JWT_SECRET or AUTH_JWT_PUBLIC_KEY_FILE must be set".into(),
			));
		};

		Ok(Self {
			listen,
			data_dir,
			store,
			admin_emails,
			jwt: JwtConfig {
				key,
				issuer: var("AUTH_JWT_ISSUER").map(Into::into),
				audience: var("AUTH_JWT_AUDIENCE").map(Into::into),
			},
			migrate_from: var("MIGRATE_FROM").map(PathBuf::from),
			cors_origins: list(var("CORS_ORIGINS")),
		})
	}
}


// vim: ts=4
