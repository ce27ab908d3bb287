//! Admin list (`admins.json`)
//!
//! Files written by hand or by older deployments may hold mixed-case or
//! padded entries, so the list is normalized on every read.

use techascend::{prelude::*, store_adapter::AdminList, utils::normalize_email};

use crate::{ADMINS_FILE, StoreAdapterJson, file};

fn normalize(list: AdminList) -> AdminList {
	let mut admins: Vec<String> = Vec::with_capacity(list.admins.len());
	for email in list.admins.iter().map(|e| normalize_email(e)).filter(|e| !e.is_empty()) {
		if !admins.contains(&email) {
			admins.push(email);
		}
	}
	AdminList { super_admin: normalize_email(&list.super_admin), admins }
}

pub(crate) async fn read(store: &StoreAdapterJson) -> ClResult<Option<AdminList>> {
	Ok(file::read_json(&store.path(ADMINS_FILE)).await?.map(normalize))
}

pub(crate) async fn write(store: &StoreAdapterJson, admins: &AdminList) -> ClResult<()> {
	file::write_json(&store.path(ADMINS_FILE), admins).await
}

pub(crate) async fn add(store: &StoreAdapterJson, email: &str) -> ClResult<AdminList> {
	let email = normalize_email(email);
	let mut list = read(store).await?.unwrap_or_default();
	if list.admins.contains(&email) {
		return Err(Error::Conflict("User is already an admin".into()));
	}
	list.admins.push(email);
	write(store, &list).await?;
	Ok(list)
}

pub(crate) async fn remove(store: &StoreAdapterJson, email: &str) -> ClResult<AdminList> {
	let email = normalize_email(email);
	let mut list = read(store).await?.unwrap_or_default();
	let len = list.admins.len();
	list.admins.retain(|a| *a != email);
	if list.admins.len() == len {
		return Err(Error::NotFound("User is not an admin".into()));
	}
	write(store, &list).await?;
	Ok(list)
}

// vim: ts=4
