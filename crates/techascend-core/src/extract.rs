//! Custom extractors for identity and admin access

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;

use techascend_types::identity_provider::Identity;

use crate::gate;
use crate::prelude::*;

// Auth //
//******//
/// Resolved identity. The identity middleware stores it in the request
/// extensions; extracting it fails with 401 on anonymous requests.
#[derive(Debug, Clone)]
pub struct Auth(pub Identity);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let identity = parts.extensions.get::<Auth>().map(|a| &a.0);
		Ok(Auth(gate::require_authenticated(identity)?.clone()))
	}
}

// OptionalAuth //
//***************//
/// Optional auth extractor that doesn't fail if auth is missing
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalAuth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let auth = parts.extensions.get::<Auth>().cloned().map(|a| a.0);
		Ok(OptionalAuth(auth))
	}
}

// Admin //
//*******//
/// Identity that passed the admin check (401 anonymous, 403 non-admin)
#[derive(Debug, Clone)]
pub struct Admin(pub Identity);

impl FromRequestParts<App> for Admin {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, app: &App) -> Result<Self, Self::Rejection> {
		let identity = parts.extensions.get::<Auth>().map(|a| &a.0);
		let identity = gate::require_admin(app, identity).await?;
		Ok(Admin(identity.clone()))
	}
}

// JsonBody, QueryParams //
//************************//
/// `axum::Json` with rejections rendered as `{ "error": ... }` (400)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` with rejections rendered as `{ "error": ... }` (400)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);

// vim: ts=4
