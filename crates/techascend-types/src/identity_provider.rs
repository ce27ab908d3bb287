//! Pluggable identity verification.
//!
//! A provider turns a bearer credential into an `Identity`. An unknown or
//! invalid credential is not an error: the request simply stays anonymous.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
	/// Stable user id issued by the provider
	pub id: Box<str>,
	pub email: Option<Box<str>>,
}

impl Identity {
	pub fn new(id: impl Into<Box<str>>, email: Option<&str>) -> Self {
		Self { id: id.into(), email: email.map(Into::into) }
	}

	pub fn email(&self) -> Option<&str> {
		self.email.as_deref()
	}
}

#[async_trait]
pub trait IdentityProvider: Debug + Send + Sync {
	/// Verifies `token`. Returns `Ok(None)` for credentials that don't verify;
	/// `Err` is reserved for provider failures.
	async fn resolve_token(&self, token: &str) -> ClResult<Option<Identity>>;
}

// vim: ts=4
