//! SQLite store CRUD operation tests
//!
//! Tests Create, Read, Update, Delete operations for events and registrations

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use techascend::error::Error;
use techascend::store_adapter::{
	Event, EventData, EventMode, ListRegistrationOptions, Registration, RegistrationData,
	StoreAdapter,
};
use techascend_store_adapter_sqlite::StoreAdapterSqlite;
use tempfile::TempDir;

async fn create_test_adapter() -> (StoreAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = StoreAdapterSqlite::new(temp_dir.path().join("store.db"))
		.await
		.expect("Failed to create adapter");
	(adapter, temp_dir)
}

fn registration(email: &str, event_id: i64) -> RegistrationData {
	RegistrationData {
		name: "Alice".into(),
		email: email.into(),
		course: "CSE".into(),
		year: "2".into(),
		college: "Not specified".into(),
		phone: "Not provided".into(),
		event_id,
		event_name: "BugHunt".into(),
		registered_at: Utc::now(),
	}
}

#[tokio::test]
async fn test_create_and_read_event() {
	let (adapter, _temp) = create_test_adapter().await;
	let data = EventData {
		name: "BugHunt".into(),
		mode: EventMode::Hybrid,
		deadline: Utc.with_ymd_and_hms(2026, 3, 10, 18, 0, 0).single(),
		prizes: vec!["Trophy".into(), "Goodies".into()],
		..EventData::default()
	};

	let event = adapter.create_event(&data).await.expect("create");
	assert_eq!(event.id, 1);

	let stored = adapter.read_event(1).await.expect("read").expect("exists");
	assert_eq!(stored, event);
	assert!(adapter.read_event(2).await.expect("read").is_none());
}

#[tokio::test]
async fn test_event_ids_not_reused() {
	let (adapter, _temp) = create_test_adapter().await;
	let data = EventData::default();

	adapter.create_event(&data).await.expect("create 1");
	adapter.create_event(&data).await.expect("create 2");
	adapter.delete_event(2).await.expect("delete");

	let event = adapter.create_event(&data).await.expect("create 3");
	assert_eq!(event.id, 3);

	let ids: Vec<i64> = adapter.list_events().await.expect("list").iter().map(|e| e.id).collect();
	assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_update_event() {
	let (adapter, _temp) = create_test_adapter().await;
	let mut event = adapter.create_event(&EventData::default()).await.expect("create");

	event.data.name = "CodeSprint".into();
	event.data.registration_open = false;
	event.data.deadline = None;
	adapter.update_event(&event).await.expect("update");

	let stored = adapter.read_event(event.id).await.expect("read").expect("exists");
	assert_eq!(stored.data.name, "CodeSprint");
	assert!(!stored.data.registration_open);

	let missing = Event { id: 99, data: EventData::default() };
	assert!(matches!(adapter.update_event(&missing).await, Err(Error::NotFound(_))));
	assert!(matches!(adapter.delete_event(99).await, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_import_event_keeps_id() {
	let (adapter, _temp) = create_test_adapter().await;
	let event = Event { id: 7, data: EventData { name: "Legacy".into(), ..EventData::default() } };

	adapter.import_event(&event).await.expect("import");
	adapter.import_event(&event).await.expect("import again");
	assert_eq!(adapter.list_events().await.expect("list").len(), 1);

	let next = adapter.create_event(&EventData::default()).await.expect("create");
	assert_eq!(next.id, 8);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_registration(&registration("a@x.com", 1)).await.expect("first");
	let res = adapter.create_registration(&registration("A@x.COM", 1)).await;
	assert!(matches!(res, Err(Error::AlreadyRegistered)));

	let opts = ListRegistrationOptions { email: Some("a@x.com"), event_id: Some(1) };
	assert_eq!(adapter.list_registrations(&opts).await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_import_registration_upserts_by_id() {
	let (adapter, _temp) = create_test_adapter().await;
	let first = Registration { id: 5, data: registration("alice@x.com", 3) };
	adapter.import_registration(&first).await.expect("import");

	let renamed = Registration {
		id: 5,
		data: RegistrationData { name: "Alice B.".into(), ..registration("alice@x.com", 3) },
	};
	adapter.import_registration(&renamed).await.expect("import again");

	// Another id with the same pair is refused and leaves the stored row alone
	let clash = Registration { id: 6, data: registration("ALICE@x.com", 3) };
	let res = adapter.import_registration(&clash).await;
	assert!(matches!(res, Err(Error::AlreadyRegistered)));

	let all = adapter.list_registrations(&ListRegistrationOptions::default()).await.expect("all");
	assert_eq!(all.len(), 1);
	assert_eq!(all[0].id, 5);
	assert_eq!(all[0].data.name, "Alice B.");
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations() {
	let (adapter, _temp) = create_test_adapter().await;
	let adapter = Arc::new(adapter);

	let mut handles = vec![];
	for _ in 0..5 {
		let adapter = Arc::clone(&adapter);
		handles.push(tokio::spawn(async move {
			adapter.create_registration(&registration("race@x.com", 1)).await.is_ok()
		}));
	}

	let mut created = 0;
	for handle in handles {
		if handle.await.expect("Task panicked") {
			created += 1;
		}
	}
	assert_eq!(created, 1);
}

#[tokio::test]
async fn test_list_and_delete_registrations() {
	let (adapter, _temp) = create_test_adapter().await;
	for (email, event_id) in [("a@x.com", 1), ("b@x.com", 1), ("a@x.com", 2)] {
		adapter.create_registration(&registration(email, event_id)).await.expect("create");
	}

	let opts = ListRegistrationOptions { email: None, event_id: Some(1) };
	let regs = adapter.list_registrations(&opts).await.expect("by event");
	assert_eq!(regs.len(), 2);
	assert!(regs.iter().all(|r| r.data.event_id == 1));

	adapter.delete_registration(regs[0].id).await.expect("delete");
	assert!(matches!(adapter.delete_registration(regs[0].id).await, Err(Error::NotFound(_))));

	let all = adapter.list_registrations(&ListRegistrationOptions::default()).await.expect("all");
	assert_eq!(all.len(), 2);
}

// vim: ts=4
