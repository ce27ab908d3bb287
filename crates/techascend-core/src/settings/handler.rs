//! Settings handlers

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;

use techascend_types::store_adapter::Settings;

use crate::{
	extract::{Admin, JsonBody},
	prelude::*,
};

#[derive(Serialize)]
pub struct SettingsResponse {
	pub settings: Settings,
}

#[derive(Serialize)]
pub struct UpdateSettingsResponse {
	pub success: bool,
	pub settings: Settings,
}

/// GET /api/settings
pub async fn get_settings(State(app): State<App>) -> ClResult<Json<SettingsResponse>> {
	let settings = app.settings.get().await?;
	Ok(Json(SettingsResponse { settings }))
}

/// POST /api/settings - shallow merge, admin only
pub async fn update_settings(
	State(app): State<App>,
	Admin(admin): Admin,
	JsonBody(patch): JsonBody<Value>,
) -> ClResult<Json<UpdateSettingsResponse>> {
	let settings = app.settings.update(patch).await?;
	info!(admin = %admin.id, "settings updated");

	Ok(Json(UpdateSettingsResponse { success: true, settings }))
}

// vim: ts=4
