//! Event handlers

use axum::{
	Json,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use techascend_core::extract::{Admin, JsonBody, QueryParams};
use techascend_types::types::{SuccessResponse, now};
use techascend_types::utils::parse_id;

use crate::prelude::*;
use crate::types::{CreateEventRequest, EventView, UpdateEventRequest, apply_update, build_event};

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
	pub id: Option<String>,
}

#[derive(Serialize)]
pub struct ListEventsResponse {
	pub events: Vec<EventView>,
}

#[derive(Serialize)]
pub struct GetEventResponse {
	pub event: EventView,
}

#[derive(Serialize)]
pub struct SaveEventResponse {
	pub success: bool,
	pub event: EventView,
}

fn not_found() -> Error {
	Error::NotFound("Event not found".into())
}

/// GET /api/events[?id=N] - public
pub async fn list_events(
	State(app): State<App>,
	QueryParams(query): QueryParams<EventQuery>,
) -> ClResult<Response> {
	let global_open = app.settings.registration_open().await?;
	let ts = now();

	if let Some(id) = query.id.as_deref().filter(|id| !id.trim().is_empty()) {
		let event_id = parse_id(id).ok_or_else(not_found)?;
		let event = app.store.read_event(event_id).await?.ok_or_else(not_found)?;
		return Ok(Json(GetEventResponse { event: EventView::new(event, global_open, ts) })
			.into_response());
	}

	let events = app
		.store
		.list_events()
		.await?
		.into_iter()
		.map(|event| EventView::new(event, global_open, ts))
		.collect();
	Ok(Json(ListEventsResponse { events }).into_response())
}

/// POST /api/events - admin only
pub async fn create_event(
	State(app): State<App>,
	Admin(admin): Admin,
	JsonBody(req): JsonBody<CreateEventRequest>,
) -> ClResult<(StatusCode, Json<SaveEventResponse>)> {
	let data = build_event(req)?;
	let event = app.store.create_event(&data).await?;
	info!(admin = %admin.id, event_id = event.id, name = %event.data.name, "event created");

	let global_open = app.settings.registration_open().await?;
	Ok((
		StatusCode::CREATED,
		Json(SaveEventResponse { success: true, event: EventView::new(event, global_open, now()) }),
	))
}

/// PUT /api/events - admin only, body carries the id
pub async fn update_event(
	State(app): State<App>,
	Admin(admin): Admin,
	JsonBody(req): JsonBody<UpdateEventRequest>,
) -> ClResult<Json<SaveEventResponse>> {
	let Some(event_id) = req.id else {
		return Err(Error::ValidationError("Event ID required".into()));
	};
	let mut event = app.store.read_event(event_id).await?.ok_or_else(not_found)?;

	apply_update(&mut event.data, req)?;
	app.store.update_event(&event).await?;
	info!(admin = %admin.id, event_id = event.id, "event updated");

	let global_open = app.settings.registration_open().await?;
	Ok(Json(SaveEventResponse { success: true, event: EventView::new(event, global_open, now()) }))
}

/// DELETE /api/events?id=N - admin only
pub async fn delete_event(
	State(app): State<App>,
	Admin(admin): Admin,
	QueryParams(query): QueryParams<EventQuery>,
) -> ClResult<Json<SuccessResponse>> {
	let Some(id) = query.id.as_deref().filter(|id| !id.trim().is_empty()) else {
		return Err(Error::ValidationError("Event ID required".into()));
	};
	let event_id = parse_id(id).ok_or_else(not_found)?;

	app.store.delete_event(event_id).await?;
	info!(admin = %admin.id, event_id, "event deleted");

	Ok(Json(SuccessResponse::ok()))
}

// vim: ts=4
