//! Shared helpers for the SQLite adapter

use sqlx::error::BoxDynError;

use techascend::prelude::*;

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Log and collapse a database error
pub(crate) fn db_err(err: sqlx::Error) -> Error {
	inspect(&err);
	Error::DbError
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
	matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Collect an iterator of row conversions, translating errors
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> ClResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.map_err(db_err)?);
	}
	Ok(items)
}

/// Wraps a column conversion failure so it surfaces as a decode error
pub(crate) fn decode_err(err: impl Into<BoxDynError>) -> sqlx::Error {
	sqlx::Error::Decode(err.into())
}

/// Decodes a JSON string-list column
pub(crate) fn parse_str_list(s: &str) -> Result<Vec<String>, sqlx::Error> {
	serde_json::from_str(s).map_err(decode_err)
}

pub(crate) fn str_list_json(list: &[String]) -> ClResult<String> {
	Ok(serde_json::to_string(list)?)
}

// vim: ts=4
