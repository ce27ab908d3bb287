//! Request helpers and sample payloads

use axum::{
	Router,
	body::{Body, to_bytes},
	http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub async fn send(
	router: &Router,
	method: Method,
	uri: &str,
	token: Option<&str>,
	body: Option<Value>,
) -> (StatusCode, Value) {
	let mut req = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
	}
	let req = match body {
		Some(body) => req
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap(),
		None => req.body(Body::empty()).unwrap(),
	};

	let res = router.clone().oneshot(req).await.unwrap();
	let status = res.status();
	let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
	let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
	(status, json)
}

/// Sends a raw, possibly malformed JSON body
pub async fn send_raw(
	router: &Router,
	method: Method,
	uri: &str,
	token: &str,
	body: &str,
) -> StatusCode {
	let req = Request::builder()
		.method(method)
		.uri(uri)
		.header(header::AUTHORIZATION, format!("Bearer {}", token))
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.unwrap();
	router.clone().oneshot(req).await.unwrap().status()
}

pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
	send(router, Method::GET, uri, token, None).await
}

pub async fn post(
	router: &Router,
	uri: &str,
	token: Option<&str>,
	body: Value,
) -> (StatusCode, Value) {
	send(router, Method::POST, uri, token, Some(body)).await
}

pub async fn put(
	router: &Router,
	uri: &str,
	token: Option<&str>,
	body: Value,
) -> (StatusCode, Value) {
	send(router, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
	send(router, Method::DELETE, uri, token, None).await
}

pub fn sample_event(name: &str) -> Value {
	json!({
		"name": name,
		"tagline": "Find the bug, win the prize",
		"description": "  A debugging contest.  ",
		"date": "2026-11-20",
		"time": "10:00 AM",
		"duration": "3 hours",
		"mode": "Hybrid",
		"location": "Lab 4",
		"category": "Contest",
		"teamSize": "1-2",
		"prizes": ["Trophy", "Goodies"],
		"requirements": ["Laptop"],
		"highlights": ["Fun"]
	})
}

pub fn sample_registration(email: &str, event_id: i64) -> Value {
	json!({
		"name": "Alice",
		"email": email,
		"course": "B.Tech",
		"year": "2",
		"college": "TechAscend Institute",
		"phone": "9999999999",
		"eventId": event_id
	})
}

// vim: ts=4
