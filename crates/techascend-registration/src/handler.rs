//! Registration handlers

use axum::{
	Json,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Serialize;

use techascend_core::extract::{Admin, JsonBody, OptionalAuth, QueryParams};
use techascend_core::gate;
use techascend_types::store_adapter::{ListRegistrationOptions, Registration};
use techascend_types::types::{SuccessResponse, now};
use techascend_types::utils::{email_eq, normalize_email, parse_id};

use crate::prelude::*;
use crate::types::{CreateRegistrationRequest, RegistrationQuery};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsRegisteredResponse {
	pub is_registered: bool,
}

#[derive(Serialize)]
pub struct ListRegistrationsResponse {
	pub registrations: Vec<Registration>,
}

#[derive(Serialize)]
pub struct CreateRegistrationResponse {
	pub success: bool,
	pub registration: Registration,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|v| !v.is_empty())
}

/// POST /api/registrations - public
pub async fn create_registration(
	State(app): State<App>,
	JsonBody(req): JsonBody<CreateRegistrationRequest>,
) -> ClResult<(StatusCode, Json<CreateRegistrationResponse>)> {
	let valid = req.validate()?;

	let event = app.store.read_event(valid.event_id).await?;
	if event.is_none() {
		debug!(event_id = valid.event_id, "registration for unknown event");
	}
	let data = valid.into_data(event.as_ref().map(|e| e.data.name.as_str()), now());

	let registration = app.store.create_registration(&data).await.inspect_err(|err| {
		if matches!(err, Error::AlreadyRegistered) {
			info!(event_id = data.event_id, "duplicate registration rejected");
		}
	})?;
	info!(registration_id = registration.id, event_id = data.event_id, "registration created");

	Ok((StatusCode::CREATED, Json(CreateRegistrationResponse { success: true, registration })))
}

/// GET /api/registrations
///
/// - `?email=&eventId=`: public "already registered?" check
/// - `?email=`: the caller's own registrations
/// - otherwise: all registrations (admin), optionally filtered by `eventId`
pub async fn list_registrations(
	State(app): State<App>,
	OptionalAuth(identity): OptionalAuth,
	QueryParams(query): QueryParams<RegistrationQuery>,
) -> ClResult<Response> {
	let email = non_empty(query.email.as_deref());
	let event_id = non_empty(query.event_id.as_deref());

	match (email, event_id) {
		(Some(email), Some(event_id)) => {
			let is_registered = match parse_id(event_id) {
				Some(event_id) => {
					let email = normalize_email(email);
					let opts = ListRegistrationOptions { email: Some(&email), event_id: Some(event_id) };
					!app.store.list_registrations(&opts).await?.is_empty()
				}
				None => false,
			};
			Ok(Json(IsRegisteredResponse { is_registered }).into_response())
		}
		(Some(email), None) => {
			let identity = gate::require_authenticated(identity.as_ref())?;
			if !identity.email().is_some_and(|own| email_eq(own, email)) {
				warn!(subject = %identity.id, "attempt to list someone else's registrations");
				return Err(Error::Forbidden("Forbidden - Can only view own registrations".into()));
			}

			let email = normalize_email(email);
			let opts = ListRegistrationOptions { email: Some(&email), event_id: None };
			let registrations = app.store.list_registrations(&opts).await?;
			Ok(Json(ListRegistrationsResponse { registrations }).into_response())
		}
		(None, event_id) => {
			gate::require_admin(&app, identity.as_ref()).await?;

			// An unparsable filter matches nothing
			let event_id = match event_id.map(parse_id) {
				Some(None) => {
					return Ok(Json(ListRegistrationsResponse { registrations: Vec::new() })
						.into_response());
				}
				Some(id) => id,
				None => None,
			};
			let opts = ListRegistrationOptions { email: None, event_id };
			let registrations = app.store.list_registrations(&opts).await?;
			Ok(Json(ListRegistrationsResponse { registrations }).into_response())
		}
	}
}

/// DELETE /api/registrations?id=N - admin only
pub async fn delete_registration(
	State(app): State<App>,
	Admin(admin): Admin,
	QueryParams(query): QueryParams<RegistrationQuery>,
) -> ClResult<Json<SuccessResponse>> {
	let Some(id) = non_empty(query.id.as_deref()) else {
		return Err(Error::ValidationError("Missing registration ID".into()));
	};
	let registration_id =
		parse_id(id).ok_or_else(|| Error::NotFound("Registration not found".into()))?;

	app.store.delete_registration(registration_id).await?;
	info!(admin = %admin.id, registration_id, "registration deleted");

	Ok(Json(SuccessResponse::ok()))
}

// vim: ts=4
