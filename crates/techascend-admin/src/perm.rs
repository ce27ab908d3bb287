//! Admin permission middleware

use axum::{
	extract::{Request, State},
	middleware::Next,
	response::Response,
};

use techascend_core::extract::OptionalAuth;
use techascend_core::gate;

use crate::prelude::*;

/// Middleware for route groups where every method is admin only.
///
/// Anonymous callers get 401, signed-in callers that aren't on the admin
/// list get 403.
pub async fn require_admin(
	State(app): State<App>,
	OptionalAuth(identity): OptionalAuth,
	req: Request,
	next: Next,
) -> Result<Response, Error> {
	gate::require_admin(&app, identity.as_ref()).await?;
	Ok(next.run(req).await)
}

// vim: ts=4
