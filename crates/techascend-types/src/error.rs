//! Error handling subsystem.
//!
//! Every handler returns `ClResult<T>`; the `IntoResponse` impl below is the
//! single place where errors are turned into `{ "error": ... }` JSON bodies.

use axum::{
	Json,
	extract::rejection::{JsonRejection, QueryRejection},
	http::StatusCode,
	response::IntoResponse,
};

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// No identity could be resolved for the request
	Unauthorized,
	/// Identity resolved, but it is not an admin
	PermissionDenied,
	/// Identity resolved, but the operation is not allowed for it
	Forbidden(String),
	ValidationError(String),
	NotFound(String),
	Conflict(String),
	/// Duplicate (email, event) registration
	AlreadyRegistered,

	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::Unauthorized => StatusCode::UNAUTHORIZED,
			Error::PermissionDenied | Error::Forbidden(_) => StatusCode::FORBIDDEN,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::Conflict(_) | Error::AlreadyRegistered => StatusCode::CONFLICT,
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::Unauthorized => write!(f, "Unauthorized - Please sign in"),
			Error::PermissionDenied => write!(f, "Forbidden - Admin access required"),
			Error::Forbidden(msg)
			| Error::ValidationError(msg)
			| Error::NotFound(msg)
			| Error::Conflict(msg) => write!(f, "{}", msg),
			Error::AlreadyRegistered => write!(f, "Already registered"),
			Error::DbError => write!(f, "Database error"),
			Error::Internal(msg) => write!(f, "Internal error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Internal(format!("JSON error: {}", err))
	}
}

impl From<JsonRejection> for Error {
	fn from(err: JsonRejection) -> Self {
		Self::ValidationError(format!("Invalid request body: {}", err.body_text()))
	}
}

impl From<QueryRejection> for Error {
	fn from(err: QueryRejection) -> Self {
		Self::ValidationError(format!("Invalid query: {}", err.body_text()))
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status();
		let body = match &self {
			Error::AlreadyRegistered => {
				serde_json::json!({ "error": self.to_string(), "alreadyRegistered": true })
			}
			// Internal details stay in the log
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				tracing::error!(error = %self, "Request failed");
				serde_json::json!({ "error": "Internal server error" })
			}
			_ => serde_json::json!({ "error": self.to_string() }),
		};

		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::PermissionDenied.status(), StatusCode::FORBIDDEN);
		assert_eq!(Error::Forbidden("x".into()).status(), StatusCode::FORBIDDEN);
		assert_eq!(Error::ValidationError("x".into()).status(), StatusCode::BAD_REQUEST);
		assert_eq!(Error::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
		assert_eq!(Error::Conflict("x".into()).status(), StatusCode::CONFLICT);
		assert_eq!(Error::AlreadyRegistered.status(), StatusCode::CONFLICT);
		assert_eq!(Error::DbError.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_display_messages() {
		assert_eq!(Error::Unauthorized.to_string(), "Unauthorized - Please sign in");
		assert_eq!(Error::PermissionDenied.to_string(), "Forbidden - Admin access required");
		assert_eq!(Error::NotFound("Event not found".into()).to_string(), "Event not found");
	}
}

// vim: ts=4
