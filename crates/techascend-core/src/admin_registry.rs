//! Admin registry
//!
//! The admin list is seeded once from configuration and then lives in the
//! store. Every email is normalized (trimmed, lower-cased) before it is
//! stored or compared.

use std::sync::Arc;

use techascend_types::store_adapter::{AdminList, StoreAdapter};
use techascend_types::utils::{is_valid_email, normalize_email};

use crate::prelude::*;

#[derive(Debug)]
pub struct AdminRegistry {
	store: Arc<dyn StoreAdapter>,
}

impl AdminRegistry {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store }
	}

	/// Writes the seed list if the store has none. The first entry becomes the
	/// super admin.
	pub async fn init(&self, seed: &[String]) -> ClResult<()> {
		if self.store.read_admins().await?.is_some() {
			debug!("admin list already initialized");
			return Ok(());
		}

		let mut admins: Vec<String> = Vec::with_capacity(seed.len());
		for email in seed.iter().map(|e| normalize_email(e)).filter(|e| !e.is_empty()) {
			if !admins.contains(&email) {
				admins.push(email);
			}
		}
		let super_admin = admins.first().cloned().unwrap_or_default();
		if super_admin.is_empty() {
			warn!("no admin emails configured, admin endpoints are unreachable");
		}

		info!(super_admin = %super_admin, count = admins.len(), "admin list seeded");
		self.store.init_admins(&AdminList { super_admin, admins }).await
	}

	/// Current list. Uninitialized stores read as empty.
	pub async fn list_admins(&self) -> ClResult<AdminList> {
		Ok(self.store.read_admins().await?.unwrap_or_default())
	}

	pub async fn is_admin(&self, email: &str) -> ClResult<bool> {
		let email = normalize_email(email);
		if email.is_empty() {
			return Ok(false);
		}
		Ok(self.list_admins().await?.admins.contains(&email))
	}

	pub async fn is_super_admin(&self, email: &str) -> ClResult<bool> {
		let email = normalize_email(email);
		let list = self.list_admins().await?;
		Ok(!list.super_admin.is_empty() && list.super_admin == email)
	}

	pub async fn add_admin(&self, email: Option<&str>) -> ClResult<AdminList> {
		let email = email.map(normalize_email).unwrap_or_default();
		if email.is_empty() {
			return Err(Error::ValidationError("Email is required".into()));
		}
		if !is_valid_email(&email) {
			return Err(Error::ValidationError("Invalid email format".into()));
		}

		let list = self.store.add_admin(&email).await?;
		info!(email = %email, "admin added");
		Ok(list)
	}

	pub async fn remove_admin(&self, email: Option<&str>) -> ClResult<AdminList> {
		let email = email.map(normalize_email).unwrap_or_default();
		if email.is_empty() {
			return Err(Error::ValidationError("Email is required".into()));
		}
		if self.is_super_admin(&email).await? {
			warn!(email = %email, "attempt to remove super admin");
			return Err(Error::Forbidden(
				"Cannot remove super admin. This account is protected.".into(),
			));
		}

		let list = self.store.remove_admin(&email).await?;
		info!(email = %email, "admin removed");
		Ok(list)
	}
}


// vim: ts=4
