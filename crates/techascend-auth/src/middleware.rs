//! Identity-resolving middleware
//!
//! Runs on every route. A verified token puts an `Auth` into the request
//! extensions; anything else leaves the request anonymous. Protected handlers
//! reject anonymous requests through the `Auth`/`Admin` extractors.

use axum::{
	extract::{Request, State},
	http::{HeaderMap, header},
	middleware::Next,
	response::Response,
};

use techascend_core::extract::Auth;

use crate::prelude::*;

/// Browser session cookie set by the identity provider's web SDK
pub const SESSION_COOKIE: &str = "__session";

fn bearer_token(headers: &HeaderMap) -> Option<String> {
	let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
	let token = value.strip_prefix("Bearer ")?.trim();
	(!token.is_empty()).then(|| token.to_string())
}

fn session_cookie(headers: &HeaderMap) -> Option<String> {
	headers
		.get_all(header::COOKIE)
		.iter()
		.filter_map(|h| h.to_str().ok())
		.flat_map(|h| h.split(';'))
		.filter_map(|pair| pair.trim().split_once('='))
		.find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
		.map(|(_, value)| value.to_string())
}

pub async fn resolve_identity(State(app): State<App>, mut req: Request, next: Next) -> Response {
	if let Some(token) = bearer_token(req.headers()).or_else(|| session_cookie(req.headers())) {
		match app.identity_provider.resolve_token(&token).await {
			Ok(Some(identity)) => {
				debug!(subject = %identity.id, "identity resolved");
				req.extensions_mut().insert(Auth(identity));
			}
			Ok(None) => debug!("invalid token, continuing anonymously"),
			Err(err) => warn!("identity provider error: {}", err),
		}
	}

	next.run(req).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	use async_trait::async_trait;
	use axum::{Router, body::Body, http::StatusCode, routing::get};
	use tempfile::TempDir;
	use tower::ServiceExt;

	use techascend_core::{AppOpts, AppState, extract::OptionalAuth};
	use techascend_store_adapter_json::StoreAdapterJson;
	use techascend_types::identity_provider::{Identity, IdentityProvider};

	#[derive(Debug)]
	struct StaticTokens;

	#[async_trait]
	impl IdentityProvider for StaticTokens {
		async fn resolve_token(&self, token: &str) -> ClResult<Option<Identity>> {
			Ok((token == "good").then(|| Identity::new("u1", Some("a@x.com"))))
		}
	}

	async fn create_test_router() -> (Router, TempDir) {
		let temp_dir = TempDir::new().expect("Failed to create temp directory");
		let store = StoreAdapterJson::new(temp_dir.path()).await.expect("Failed to create store");
		let app = Arc::new(AppState::new(AppOpts::default(), Arc::new(store), Arc::new(StaticTokens)));

		let router = Router::new()
			.route(
				"/whoami",
				get(|OptionalAuth(identity): OptionalAuth| async move {
					identity.and_then(|i| i.email.map(String::from)).unwrap_or_default()
				}),
			)
			.layer(axum::middleware::from_fn_with_state(app.clone(), resolve_identity))
			.with_state(app);
		(router, temp_dir)
	}

	async fn whoami(router: Router, header: Option<(header::HeaderName, &str)>) -> String {
		let mut req = Request::builder().uri("/whoami");
		if let Some((name, value)) = header {
			req = req.header(name, value);
		}
		let res = router.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
		assert_eq!(res.status(), StatusCode::OK);
		let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
		String::from_utf8(body.to_vec()).unwrap()
	}

	#[tokio::test]
	async fn test_bearer_token() {
		let (router, _temp) = create_test_router().await;
		assert_eq!(whoami(router, Some((header::AUTHORIZATION, "Bearer good"))).await, "a@x.com");
	}

	#[tokio::test]
	async fn test_session_cookie() {
		let (router, _temp) = create_test_router().await;
		let cookie = "theme=dark; __session=good";
		assert_eq!(whoami(router, Some((header::COOKIE, cookie))).await, "a@x.com");
	}

	#[tokio::test]
	async fn test_anonymous() {
		let (router, _temp) = create_test_router().await;
		assert_eq!(whoami(router.clone(), None).await, "");
		assert_eq!(whoami(router.clone(), Some((header::AUTHORIZATION, "Bearer bad"))).await, "");
		assert_eq!(whoami(router, Some((header::AUTHORIZATION, "Basic good"))).await, "");
	}

	#[test]
	fn test_cookie_parsing() {
		let mut headers = HeaderMap::new();
		headers.insert(header::COOKIE, "a=1; __session=tok; b=2".parse().unwrap());
		assert_eq!(session_cookie(&headers).as_deref(), Some("tok"));

		let mut headers = HeaderMap::new();
		headers.insert(header::COOKIE, "__session=".parse().unwrap());
		assert_eq!(session_cookie(&headers), None);
	}
}

// vim: ts=4
