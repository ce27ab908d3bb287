//! JWT identity provider
//!
//! Verifies session tokens signed either with a shared secret (HS256) or
//! with the identity provider's RSA key (RS256). Only `sub` and `email` are
//! read from the claims; `exp` is always enforced.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use techascend_types::identity_provider::{Identity, IdentityProvider};

use crate::prelude::*;

#[derive(Debug, Clone)]
pub enum JwtKey {
	/// HS256 shared secret
	Secret(Box<str>),
	/// RS256 public key, PEM encoded
	RsaPem(Box<[u8]>),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
	pub key: JwtKey,
	pub issuer: Option<Box<str>>,
	pub audience: Option<Box<str>>,
}

#[derive(Clone, Debug, Deserialize)]
struct SessionClaims {
	sub: String,
	#[serde(default)]
	email: Option<String>,
}

pub struct JwtIdentityProvider {
	key: DecodingKey,
	validation: Validation,
}

impl std::fmt::Debug for JwtIdentityProvider {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JwtIdentityProvider")
			.field("algorithms", &self.validation.algorithms)
			.field("issuer", &self.validation.iss)
			.finish_non_exhaustive()
	}
}

impl JwtIdentityProvider {
	pub fn new(config: &JwtConfig) -> ClResult<Self> {
		let (key, algorithm) = match &config.key {
			JwtKey::Secret(secret) => {
				if secret.is_empty() {
					return Err(Error::ValidationError("JWT secret must not be empty".into()));
				}
				(DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
			}
			JwtKey::RsaPem(pem) => {
				let key = DecodingKey::from_rsa_pem(pem).map_err(|err| {
					error!("FATAL: invalid RSA public key: {}", err);
					Error::ValidationError("Invalid RSA public key".into())
				})?;
				(key, Algorithm::RS256)
			}
		};

		let mut validation = Validation::new(algorithm);
		if let Some(issuer) = &config.issuer {
			validation.set_issuer(&[issuer.as_ref()]);
		}
		match &config.audience {
			Some(audience) => validation.set_audience(&[audience.as_ref()]),
			None => validation.validate_aud = false,
		}

		Ok(Self { key, validation })
	}
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
	async fn resolve_token(&self, token: &str) -> ClResult<Option<Identity>> {
		let claims = match jsonwebtoken::decode::<SessionClaims>(token, &self.key, &self.validation)
		{
			Ok(data) => data.claims,
			Err(err) => {
				debug!("token rejected: {}", err);
				return Ok(None);
			}
		};
		if claims.sub.is_empty() {
			debug!("token rejected: empty subject");
			return Ok(None);
		}

		Ok(Some(Identity::new(claims.sub, claims.email.as_deref())))
	}
}


// vim: ts=4
