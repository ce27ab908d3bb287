//! Database schema initialization
//!
//! Creates tables and indexes if they don't exist yet.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS globals (
			key text NOT NULL,
			value text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Events
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS events (
		event_id integer PRIMARY KEY AUTOINCREMENT,
		name text NOT NULL,
		tagline text NOT NULL DEFAULT '',
		description text NOT NULL DEFAULT '',
		image text NOT NULL,
		image_path text,
		date text NOT NULL DEFAULT '',
		time text NOT NULL DEFAULT '',
		duration text NOT NULL DEFAULT '',
		mode text NOT NULL,			-- 'Online', 'Offline', 'Hybrid'
		location text NOT NULL DEFAULT '',
		category text NOT NULL DEFAULT '',
		team_size text NOT NULL,
		registration_deadline text NOT NULL DEFAULT '',
		deadline text,				-- RFC 3339, NULL: no deadline
		registration_open boolean NOT NULL DEFAULT 1,
		prizes json NOT NULL DEFAULT '[]',
		requirements json NOT NULL DEFAULT '[]',
		highlights json NOT NULL DEFAULT '[]'
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Registrations
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS registrations (
		reg_id integer PRIMARY KEY AUTOINCREMENT,
		name text NOT NULL,
		email text NOT NULL,		-- lower-case
		course text NOT NULL,
		year text NOT NULL,
		college text NOT NULL,
		phone text NOT NULL,
		event_id integer NOT NULL,
		event_name text NOT NULL,
		registered_at text NOT NULL
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_registrations_email_event ON registrations(email, event_id)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_registrations_event ON registrations(event_id)")
		.execute(&mut *tx)
		.await?;

	// Admins
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS admins (
		admin_id integer PRIMARY KEY AUTOINCREMENT,
		email text NOT NULL UNIQUE
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		name text NOT NULL,
		value text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
