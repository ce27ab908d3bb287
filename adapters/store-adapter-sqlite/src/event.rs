//! Event storage

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use techascend::{
	prelude::*,
	store_adapter::{Event, EventData, EventMode},
	types::{format_timestamp, parse_timestamp},
};

use crate::utils::{collect_res, db_err, decode_err, parse_str_list, str_list_json};

const EVENT_COLUMNS: &str = "event_id, name, tagline, description, image, image_path, date, time,
	duration, mode, location, category, team_size, registration_deadline, deadline,
	registration_open, prizes, requirements, highlights";

fn event_from_row(row: &SqliteRow) -> Result<Event, sqlx::Error> {
	let mode: String = row.try_get("mode")?;
	let deadline: Option<String> = row.try_get("deadline")?;

	Ok(Event {
		id: row.try_get("event_id")?,
		data: EventData {
			name: row.try_get("name")?,
			tagline: row.try_get("tagline")?,
			description: row.try_get("description")?,
			image: row.try_get("image")?,
			image_path: row.try_get("image_path")?,
			date: row.try_get("date")?,
			time: row.try_get("time")?,
			duration: row.try_get("duration")?,
			mode: mode.parse::<EventMode>().map_err(decode_err)?,
			location: row.try_get("location")?,
			category: row.try_get("category")?,
			team_size: row.try_get("team_size")?,
			registration_deadline: row.try_get("registration_deadline")?,
			deadline: deadline.as_deref().and_then(|d| parse_timestamp(d).ok().flatten()),
			registration_open: row.try_get("registration_open")?,
			prizes: parse_str_list(row.try_get("prizes")?)?,
			requirements: parse_str_list(row.try_get("requirements")?)?,
			highlights: parse_str_list(row.try_get("highlights")?)?,
		},
	})
}

/// Binds every data column in `EVENT_COLUMNS` order (after `event_id`)
fn bind_data<'q>(
	query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
	data: &'q EventData,
) -> ClResult<sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>> {
	Ok(query
		.bind(&data.name)
		.bind(&data.tagline)
		.bind(&data.description)
		.bind(&data.image)
		.bind(data.image_path.as_deref())
		.bind(&data.date)
		.bind(&data.time)
		.bind(&data.duration)
		.bind(data.mode.as_str())
		.bind(&data.location)
		.bind(&data.category)
		.bind(&data.team_size)
		.bind(&data.registration_deadline)
		.bind(data.deadline.as_ref().map(format_timestamp))
		.bind(data.registration_open)
		.bind(str_list_json(&data.prizes)?)
		.bind(str_list_json(&data.requirements)?)
		.bind(str_list_json(&data.highlights)?))
}

pub(crate) async fn list(db: &SqlitePool) -> ClResult<Vec<Event>> {
	let rows = sqlx::query(&format!("SELECT {} FROM events ORDER BY event_id", EVENT_COLUMNS))
		.fetch_all(db)
		.await
		.map_err(db_err)?;

	collect_res(rows.iter().map(event_from_row))
}

pub(crate) async fn read(db: &SqlitePool, event_id: i64) -> ClResult<Option<Event>> {
	let row = sqlx::query(&format!("SELECT {} FROM events WHERE event_id = ?", EVENT_COLUMNS))
		.bind(event_id)
		.fetch_optional(db)
		.await
		.map_err(db_err)?;

	row.as_ref().map(event_from_row).transpose().map_err(db_err)
}

pub(crate) async fn create(db: &SqlitePool, data: &EventData) -> ClResult<Event> {
	let query = sqlx::query(
		"INSERT INTO events (name, tagline, description, image, image_path, date, time,
			duration, mode, location, category, team_size, registration_deadline, deadline,
			registration_open, prizes, requirements, highlights)
		VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
		RETURNING event_id",
	);
	let row = bind_data(query, data)?.fetch_one(db).await.map_err(db_err)?;
	let id: i64 = row.try_get("event_id").map_err(db_err)?;

	info!(event_id = id, "event created");
	Ok(Event { id, data: data.clone() })
}

pub(crate) async fn update(db: &SqlitePool, event: &Event) -> ClResult<()> {
	let query = sqlx::query(
		"UPDATE events SET name = ?, tagline = ?, description = ?, image = ?, image_path = ?,
			date = ?, time = ?, duration = ?, mode = ?, location = ?, category = ?,
			team_size = ?, registration_deadline = ?, deadline = ?, registration_open = ?,
			prizes = ?, requirements = ?, highlights = ?
		WHERE event_id = ?",
	);
	let res = bind_data(query, &event.data)?.bind(event.id).execute(db).await.map_err(db_err)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound("Event not found".into()));
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, event_id: i64) -> ClResult<()> {
	let res = sqlx::query("DELETE FROM events WHERE event_id = ?")
		.bind(event_id)
		.execute(db)
		.await
		.map_err(db_err)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound("Event not found".into()));
	}
	Ok(())
}

pub(crate) async fn import(db: &SqlitePool, event: &Event) -> ClResult<()> {
	let sql = format!(
		"INSERT OR REPLACE INTO events ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
		EVENT_COLUMNS
	);
	let query = sqlx::query(&sql).bind(event.id);
	bind_data(query, &event.data)?.execute(db).await.map_err(db_err)?;

	Ok(())
}

// vim: ts=4
