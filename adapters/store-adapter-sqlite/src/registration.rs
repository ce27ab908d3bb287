//! Registration storage
//!
//! `(email, event_id)` uniqueness is enforced by a unique index, so
//! concurrent duplicates lose at insert time.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use techascend::{
	prelude::*,
	store_adapter::{ListRegistrationOptions, Registration, RegistrationData},
	types::format_timestamp,
};

use crate::utils::{collect_res, db_err, decode_err, is_unique_violation};

fn registration_from_row(row: &SqliteRow) -> Result<Registration, sqlx::Error> {
	let registered_at: String = row.try_get("registered_at")?;

	Ok(Registration {
		id: row.try_get("reg_id")?,
		data: RegistrationData {
			name: row.try_get("name")?,
			email: row.try_get("email")?,
			course: row.try_get("course")?,
			year: row.try_get("year")?,
			college: row.try_get("college")?,
			phone: row.try_get("phone")?,
			event_id: row.try_get("event_id")?,
			event_name: row.try_get("event_name")?,
			registered_at: DateTime::parse_from_rfc3339(&registered_at)
				.map_err(decode_err)?
				.with_timezone(&Utc),
		},
	})
}

pub(crate) async fn list(
	db: &SqlitePool,
	opts: &ListRegistrationOptions<'_>,
) -> ClResult<Vec<Registration>> {
	let mut query = sqlx::QueryBuilder::new(
		"SELECT reg_id, name, email, course, year, college, phone, event_id, event_name,
			registered_at FROM registrations WHERE 1=1",
	);
	if let Some(email) = opts.email {
		query.push(" AND email = ").push_bind(email.to_lowercase());
	}
	if let Some(event_id) = opts.event_id {
		query.push(" AND event_id = ").push_bind(event_id);
	}
	query.push(" ORDER BY reg_id");

	let rows = query.build().fetch_all(db).await.map_err(db_err)?;
	collect_res(rows.iter().map(registration_from_row))
}

pub(crate) async fn create(db: &SqlitePool, data: &RegistrationData) -> ClResult<Registration> {
	let res = sqlx::query(
		"INSERT INTO registrations (name, email, course, year, college, phone, event_id,
			event_name, registered_at)
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
		RETURNING reg_id",
	)
	.bind(&data.name)
	.bind(data.email.to_lowercase())
	.bind(&data.course)
	.bind(&data.year)
	.bind(&data.college)
	.bind(&data.phone)
	.bind(data.event_id)
	.bind(&data.event_name)
	.bind(format_timestamp(&data.registered_at))
	.fetch_one(db)
	.await;

	let row = match res {
		Ok(row) => row,
		Err(err) if is_unique_violation(&err) => {
			debug!(event_id = data.event_id, "duplicate registration");
			return Err(Error::AlreadyRegistered);
		}
		Err(err) => return Err(db_err(err)),
	};
	let id: i64 = row.try_get("reg_id").map_err(db_err)?;

	info!(registration_id = id, event_id = data.event_id, "registration created");
	Ok(Registration { id, data: data.clone() })
}

pub(crate) async fn delete(db: &SqlitePool, registration_id: i64) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM registrations WHERE reg_id = ?")
		.bind(registration_id)
		.execute(db)
		.await
		.map_err(db_err)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound("Registration not found".into()));
	}
	Ok(())
}

pub(crate) async fn import(db: &SqlitePool, registration: &Registration) -> ClResult<()> {
	let data = &registration.data;
	let res = sqlx::query(
		"INSERT INTO registrations (reg_id, name, email, course, year, college,
			phone, event_id, event_name, registered_at)
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
		ON CONFLICT(reg_id) DO UPDATE SET name = excluded.name, email = excluded.email,
			course = excluded.course, year = excluded.year, college = excluded.college,
			phone = excluded.phone, event_id = excluded.event_id,
			event_name = excluded.event_name, registered_at = excluded.registered_at",
	)
	.bind(registration.id)
	.bind(&data.name)
	.bind(data.email.to_lowercase())
	.bind(&data.course)
	.bind(&data.year)
	.bind(&data.college)
	.bind(&data.phone)
	.bind(data.event_id)
	.bind(&data.event_name)
	.bind(format_timestamp(&data.registered_at))
	.execute(db)
	.await;

	match res {
		Ok(_) => Ok(()),
		Err(err) if is_unique_violation(&err) => {
			debug!(registration_id = registration.id, "imported registration duplicates a pair");
			Err(Error::AlreadyRegistered)
		}
		Err(err) => Err(db_err(err)),
	}
}

// vim: ts=4
