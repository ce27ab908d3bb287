//! Authorization gate
//!
//! Two checks cover every protected route: "is someone signed in" and "is
//! the signed-in person an admin". Both are also available as extractors
//! (see `extract`).

use techascend_types::identity_provider::Identity;

use crate::prelude::*;

pub fn require_authenticated(identity: Option<&Identity>) -> ClResult<&Identity> {
	identity.ok_or(Error::Unauthorized)
}

pub async fn require_admin<'a>(app: &App, identity: Option<&'a Identity>) -> ClResult<&'a Identity> {
	let identity = require_authenticated(identity)?;

	let Some(email) = identity.email() else {
		warn!(subject = %identity.id, "Admin permission denied - identity has no email");
		return Err(Error::PermissionDenied);
	};
	if !app.admins.is_admin(email).await? {
		warn!(subject = %identity.id, email = %email, "Admin permission denied");
		return Err(Error::PermissionDenied);
	}

	Ok(identity)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use tempfile::TempDir;

	use async_trait::async_trait;
	use techascend_store_adapter_json::StoreAdapterJson;
	use techascend_types::identity_provider::IdentityProvider;

	use crate::app::{AppOpts, AppState};

	#[derive(Debug)]
	struct NoIdentities;

	#[async_trait]
	impl IdentityProvider for NoIdentities {
		async fn resolve_token(&self, _token: &str) -> ClResult<Option<Identity>> {
			Ok(None)
		}
	}

	async fn create_test_app() -> (App, TempDir) {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let store = StoreAdapterJson::new(temp_dir.path()).await.expect("Failed to create store");
		let app = Arc::new(AppState::new(AppOpts::default(), Arc::new(store), Arc::new(NoIdentities)));
		app.admins.init(&["root@x.com".to_string()]).await.expect("Failed to seed admins");
		(app, temp_dir)
	}

	#[test]
	fn test_require_authenticated() {
		assert!(matches!(require_authenticated(None), Err(Error::Unauthorized)));
		let identity = Identity::new("u1", None);
		assert_eq!(require_authenticated(Some(&identity)).unwrap().id.as_ref(), "u1");
	}

	#[tokio::test]
	async fn test_require_admin() {
		let (app, _temp) = create_test_app().await;

		assert!(matches!(require_admin(&app, None).await, Err(Error::Unauthorized)));

		let no_email = Identity::new("u1", None);
		assert!(matches!(require_admin(&app, Some(&no_email)).await, Err(Error::PermissionDenied)));

		let user = Identity::new("u2", Some("user@x.com"));
		assert!(matches!(require_admin(&app, Some(&user)).await, Err(Error::PermissionDenied)));

		let admin = Identity::new("u3", Some("ROOT@x.com"));
		assert!(require_admin(&app, Some(&admin)).await.is_ok());
	}
}

// vim: ts=4
