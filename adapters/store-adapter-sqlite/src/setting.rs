//! Settings key-value store
//!
//! Values are stored as JSON text, one row per key.

use sqlx::{Row, SqlitePool};

use techascend::{prelude::*, store_adapter::Settings};

use crate::utils::db_err;

pub(crate) async fn read(db: &SqlitePool) -> ClResult<Settings> {
	let rows = sqlx::query("SELECT name, value FROM settings ORDER BY name")
		.fetch_all(db)
		.await
		.map_err(db_err)?;

	let mut settings = Settings::new();
	for row in rows {
		let name: String = row.try_get("name").map_err(db_err)?;
		let value: Option<String> = row.try_get("value").map_err(db_err)?;
		settings.insert(
			name,
			value
				.and_then(|v| serde_json::from_str(&v).ok())
				.unwrap_or(serde_json::Value::Null),
		);
	}

	Ok(settings)
}

pub(crate) async fn update(db: &SqlitePool, patch: &Settings) -> ClResult<Settings> {
	let mut tx = db.begin().await.map_err(db_err)?;
	for (name, value) in patch {
		sqlx::query("INSERT OR REPLACE INTO settings (name, value) VALUES (?, ?)")
			.bind(name)
			.bind(value.to_string())
			.execute(&mut *tx)
			.await
			.map_err(db_err)?;
	}
	tx.commit().await.map_err(db_err)?;

	read(db).await
}

// vim: ts=4
