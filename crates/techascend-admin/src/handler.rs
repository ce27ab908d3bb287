//! Admin list handlers
//!
//! Mounted behind `perm::require_admin`, so `Auth` here is always an admin.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use techascend_core::extract::{Auth, JsonBody, QueryParams};
use techascend_types::utils::normalize_email;

use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
pub struct AdminEmailRequest {
	pub email: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAdminsResponse {
	pub admins: Vec<String>,
	pub super_admin: String,
}

#[derive(Serialize)]
pub struct ChangeAdminsResponse {
	pub success: bool,
	pub message: String,
	pub admins: Vec<String>,
}

/// GET /api/admins
pub async fn list_admins(State(app): State<App>) -> ClResult<Json<ListAdminsResponse>> {
	let list = app.admins.list_admins().await?;
	Ok(Json(ListAdminsResponse { admins: list.admins, super_admin: list.super_admin }))
}

/// POST /api/admins
pub async fn add_admin(
	State(app): State<App>,
	Auth(admin): Auth,
	JsonBody(req): JsonBody<AdminEmailRequest>,
) -> ClResult<(StatusCode, Json<ChangeAdminsResponse>)> {
	let list = app.admins.add_admin(req.email.as_deref()).await?;
	let email = req.email.as_deref().map(normalize_email).unwrap_or_default();
	info!(admin = %admin.id, email = %email, "admin granted");

	Ok((
		StatusCode::CREATED,
		Json(ChangeAdminsResponse {
			success: true,
			message: format!("{} has been added as admin", email),
			admins: list.admins,
		}),
	))
}

/// DELETE /api/admins?email=
pub async fn remove_admin(
	State(app): State<App>,
	Auth(admin): Auth,
	QueryParams(query): QueryParams<AdminEmailRequest>,
) -> ClResult<Json<ChangeAdminsResponse>> {
	let list = app.admins.remove_admin(query.email.as_deref()).await?;
	let email = query.email.as_deref().map(normalize_email).unwrap_or_default();
	info!(admin = %admin.id, email = %email, "admin revoked");

	Ok(Json(ChangeAdminsResponse {
		success: true,
		message: format!("{} has been removed from admin", email),
		admins: list.admins,
	}))
}


// vim: ts=4
