//! Request logging middleware

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use crate::prelude::*;

pub async fn log_request(req: Request, next: Next) -> Response {
	let start = Instant::now();
	info!("REQ {} {}", req.method(), req.uri().path());

	let res = next.run(req).await;

	let status = res.status();
	let elapsed = start.elapsed().as_millis();
	if status.is_client_error() || status.is_server_error() {
		warn!("RES: {} tm:{}ms", status, elapsed);
	} else {
		info!("RES: {} tm:{}ms", status, elapsed);
	}

	res
}

// vim: ts=4
