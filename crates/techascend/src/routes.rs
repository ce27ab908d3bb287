//! API routes

use std::time::Duration;

use axum::{
	Router,
	http::{
		HeaderValue, Method,
		header::{AUTHORIZATION, CONTENT_TYPE},
	},
	middleware,
	routing::get,
};
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	trace::TraceLayer,
};

use crate::prelude::*;
use crate::{admin, auth, event, migrate, registration, request_log, settings};

async fn not_found() -> Error {
	Error::NotFound("Not found".into())
}

fn cors_layer(origins: &[Box<str>]) -> CorsLayer {
	let base = CorsLayer::new()
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
		.allow_headers([CONTENT_TYPE, AUTHORIZATION])
		.max_age(Duration::from_secs(60 * 60));

	if origins.iter().any(|o| o.as_ref() == "*") {
		return base.allow_origin(Any);
	}

	let origins: Vec<HeaderValue> = origins
		.iter()
		.filter_map(|origin| {
			HeaderValue::from_str(origin)
				.inspect_err(|_| warn!(origin = %origin, "ignoring invalid CORS origin"))
				.ok()
		})
		.collect();
	base.allow_origin(AllowOrigin::list(origins)).allow_credentials(true)
}

pub fn init(app: App) -> Router {
	// Every method on these routes is admin only
	let admin_router = Router::new()
		.route(
			"/api/admins",
			get(admin::handler::list_admins)
				.post(admin::handler::add_admin)
				.delete(admin::handler::remove_admin),
		)
		.route("/api/migrate", get(migrate::get_migrate))
		.route_layer(middleware::from_fn_with_state(app.clone(), admin::perm::require_admin));

	// Mixed public / admin routes, admin methods check via the `Admin` extractor
	let api_router = Router::new()
		.route(
			"/api/events",
			get(event::handler::list_events)
				.post(event::handler::create_event)
				.put(event::handler::update_event)
				.delete(event::handler::delete_event),
		)
		.route(
			"/api/registrations",
			get(registration::handler::list_registrations)
				.post(registration::handler::create_registration)
				.delete(registration::handler::delete_registration),
		)
		.route(
			"/api/settings",
			get(settings::handler::get_settings).post(settings::handler::update_settings),
		);

	Router::new()
		.merge(api_router)
		.merge(admin_router)
		.fallback(not_found)
		.layer(middleware::from_fn_with_state(app.clone(), auth::resolve_identity))
		.layer(middleware::from_fn(request_log::log_request))
		.layer(TraceLayer::new_for_http())
		.layer(cors_layer(&app.opts.cors_origins))
		.with_state(app)
}

// vim: ts=4
