//! Event API tests

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_anonymous_list_is_public() {
	let t = create_json_app().await;

	let (status, body) = get(&t.router, "/api/events", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["events"], json!([]));
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
	let t = create_json_app().await;

	let (status, body) =
		post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("BugHunt")).await;
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(body["success"], true);
	assert_eq!(body["event"]["id"], 1);
	assert_eq!(body["event"]["name"], "BugHunt");
	assert_eq!(body["event"]["description"], "A debugging contest.");
	assert_eq!(body["event"]["mode"], "Hybrid");
	assert_eq!(body["event"]["registrationStatus"], "open");

	let (_, body) = post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("CTF")).await;
	assert_eq!(body["event"]["id"], 2);

	let (status, _) = delete(&t.router, "/api/events?id=1", Some(ADMIN_TOKEN)).await;
	assert_eq!(status, StatusCode::OK);

	let (_, body) = get(&t.router, "/api/events", None).await;
	let events = body["events"].as_array().unwrap();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0]["id"], 2);

	// ids are never reused after a delete
	let (_, body) = post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("Quiz")).await;
	assert_eq!(body["event"]["id"], 3);
}

#[tokio::test]
async fn test_create_defaults() {
	let t = create_sqlite_app().await;

	let (status, body) = post(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({})).await;
	assert_eq!(status, StatusCode::CREATED);
	let event = &body["event"];
	assert_eq!(event["id"], 1);
	assert_eq!(event["name"], "New Event");
	assert_eq!(event["image"], "📅");
	assert_eq!(event["mode"], "Offline");
	assert_eq!(event["teamSize"], "Individual");
	assert_eq!(event["registrationOpen"], true);
	assert_eq!(event["prizes"], json!([]));
}

#[tokio::test]
async fn test_get_single_event() {
	let t = create_json_app().await;
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("BugHunt")).await;

	let (status, body) = get(&t.router, "/api/events?id=1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["event"]["name"], "BugHunt");

	for uri in ["/api/events?id=99", "/api/events?id=abc"] {
		let (status, body) = get(&t.router, uri, None).await;
		assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
		assert_eq!(body["error"], "Event not found");
	}

	// a blank id lists everything
	let (status, body) = get(&t.router, "/api/events?id=", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_write_access() {
	let t = create_json_app().await;
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("BugHunt")).await;

	let (status, _) = post(&t.router, "/api/events", None, sample_event("X")).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);

	let (status, _) = post(&t.router, "/api/events", Some(USER_TOKEN), sample_event("X")).await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let (status, body) = delete(&t.router, "/api/events?id=1", Some(USER_TOKEN)).await;
	assert_eq!(status, StatusCode::FORBIDDEN);
	assert!(body["error"].is_string());

	let (status, _) = delete(&t.router, "/api/events?id=1", Some(NO_EMAIL_TOKEN)).await;
	assert_eq!(status, StatusCode::FORBIDDEN);

	let (status, _) = delete(&t.router, "/api/events?id=1", Some("garbage")).await;
	assert_eq!(status, StatusCode::UNAUTHORIZED);

	let (_, body) = get(&t.router, "/api/events", None).await;
	assert_eq!(body["events"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_event() {
	let t = create_json_app().await;
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("BugHunt")).await;

	let (status, body) = put(
		&t.router,
		"/api/events",
		Some(ADMIN_TOKEN),
		json!({"id": 1, "name": "BugHunt 2", "mode": "Online"}),
	)
	.await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["event"]["name"], "BugHunt 2");
	assert_eq!(body["event"]["mode"], "Online");
	assert_eq!(body["event"]["location"], "Lab 4");

	let (status, body) = put(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({"name": "X"})).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "Event ID required");

	let (status, _) = put(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({"id": 42})).await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, _) =
		put(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({"id": 1, "mode": "virtual"})).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (status, body) =
		put(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({"id": 1, "name": "   "})).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "Event name cannot be empty");
}

#[tokio::test]
async fn test_delete_event_validation() {
	let t = create_json_app().await;

	let (status, body) = delete(&t.router, "/api/events", Some(ADMIN_TOKEN)).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["error"], "Event ID required");

	let (status, _) = delete(&t.router, "/api/events?id=7", Some(ADMIN_TOKEN)).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_registration_status() {
	let t = create_json_app().await;
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), sample_event("Open")).await;

	let mut past = sample_event("Past deadline");
	past["deadline"] = json!("2020-01-01T00:00:00Z");
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), past).await;

	let mut closed = sample_event("Closed");
	closed["registrationOpen"] = json!(false);
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), closed).await;

	let mut future = sample_event("Future deadline");
	future["deadline"] = json!("2999-01-01T00:00:00Z");
	post(&t.router, "/api/events", Some(ADMIN_TOKEN), future).await;

	let (_, body) = get(&t.router, "/api/events", None).await;
	let status: Vec<&str> = body["events"]
		.as_array()
		.unwrap()
		.iter()
		.map(|e| e["registrationStatus"].as_str().unwrap())
		.collect();
	assert_eq!(status, vec!["open", "closed", "closed", "open"]);

	// global switch closes everything
	let (status, _) =
		post(&t.router, "/api/settings", Some(ADMIN_TOKEN), json!({"registrationOpen": false}))
			.await;
	assert_eq!(status, StatusCode::OK);

	let (_, body) = get(&t.router, "/api/events", None).await;
	assert!(body["events"].as_array().unwrap().iter().all(|e| e["registrationStatus"] == "closed"));

	// clearing the deadline reopens the event once the switch is back on
	post(&t.router, "/api/settings", Some(ADMIN_TOKEN), json!({"registrationOpen": true})).await;
	put(&t.router, "/api/events", Some(ADMIN_TOKEN), json!({"id": 2, "deadline": null})).await;
	let (_, body) = get(&t.router, "/api/events?id=2", None).await;
	assert_eq!(body["event"]["registrationStatus"], "open");
	assert!(body["event"].get("deadline").is_none());
}

#[tokio::test]
async fn test_malformed_body() {
	let t = create_json_app().await;

	let status =
		send_raw(&t.router, Method::POST, "/api/events", ADMIN_TOKEN, "{\"name\": \"x\"").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);

	let (_, body) = get(&t.router, "/api/events", None).await;
	assert_eq!(body["events"], json!([]));
}

#[tokio::test]
async fn test_unknown_route() {
	let t = create_json_app().await;

	let (status, body) = get(&t.router, "/api/nothing", None).await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "Not found");
}

// vim: ts=4
