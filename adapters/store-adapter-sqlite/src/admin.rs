//! Admin list storage
//!
//! Admins are kept in insertion order; the super admin lives in `globals`.
//! The `super_admin` key doubles as the "initialized" marker.

use sqlx::{Row, SqlitePool};

use techascend::{prelude::*, store_adapter::AdminList};

use crate::utils::{db_err, is_unique_violation};

const SUPER_ADMIN_KEY: &str = "super_admin";

pub(crate) async fn read(db: &SqlitePool) -> ClResult<Option<AdminList>> {
	let super_admin = sqlx::query("SELECT value FROM globals WHERE key = ?")
		.bind(SUPER_ADMIN_KEY)
		.fetch_optional(db)
		.await
		.map_err(db_err)?;
	let Some(row) = super_admin else {
		return Ok(None);
	};
	let super_admin: Option<String> = row.try_get("value").map_err(db_err)?;

	let rows = sqlx::query("SELECT email FROM admins ORDER BY admin_id")
		.fetch_all(db)
		.await
		.map_err(db_err)?;
	let admins = rows
		.iter()
		.map(|row| row.try_get::<String, _>("email"))
		.collect::<Result<Vec<_>, _>>()
		.map_err(db_err)?;

	Ok(Some(AdminList { super_admin: super_admin.unwrap_or_default(), admins }))
}

pub(crate) async fn init(db: &SqlitePool, list: &AdminList) -> ClResult<()> {
	let mut tx = db.begin().await.map_err(db_err)?;

	sqlx::query("DELETE FROM admins").execute(&mut *tx).await.map_err(db_err)?;
	for email in &list.admins {
		sqlx::query("INSERT OR IGNORE INTO admins (email) VALUES (?)")
			.bind(email)
			.execute(&mut *tx)
			.await
			.map_err(db_err)?;
	}
	sqlx::query("INSERT OR REPLACE INTO globals (key, value) VALUES (?, ?)")
		.bind(SUPER_ADMIN_KEY)
		.bind(&list.super_admin)
		.execute(&mut *tx)
		.await
		.map_err(db_err)?;

	tx.commit().await.map_err(db_err)?;
	Ok(())
}

pub(crate) async fn add(db: &SqlitePool, email: &str) -> ClResult<AdminList> {
	let res = sqlx::query("INSERT INTO admins (email) VALUES (?)").bind(email).execute(db).await;
	match res {
		Ok(_) => (),
		Err(err) if is_unique_violation(&err) => {
			return Err(Error::Conflict("User is already an admin".into()));
		}
		Err(err) => return Err(db_err(err)),
	}

	read(db).await?.ok_or(Error::DbError)
}

pub(crate) async fn remove(db: &SqlitePool, email: &str) -> ClResult<AdminList> {
	let res = sqlx::query("DELETE FROM admins WHERE email = ?")
		.bind(email)
		.execute(db)
		.await
		.map_err(db_err)?;
	if res.rows_affected() == 0 {
		return Err(Error::NotFound("User is not an admin".into()));
	}

	read(db).await?.ok_or(Error::DbError)
}

// vim: ts=4
