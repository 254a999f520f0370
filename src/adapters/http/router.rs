//! Application router: routes plus the cross-cutting tower layers.

use std::sync::Arc;

use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::login::{login_routes, LoginAppState};

/// Build the complete application router.
///
/// # Routes
///
/// - `GET /` - Plaintext banner, no side effects
/// - `POST /proxy-login` - Login proxy
///
/// # Layers (outermost first)
///
/// - Request tracing
/// - CORS, only when origins are configured
/// - Per-request timeout (`408` when exceeded)
/// - In-flight cap on the login route; `GET /` stays outside it
pub fn app_router(state: LoginAppState, server: &ServerConfig) -> Router {
    let banner: Arc<str> = Arc::from(server.banner.as_str());

    let login = login_routes().route_layer(GlobalConcurrencyLimitLayer::new(
        server.max_concurrent_requests,
    ));

    let router = Router::new()
        .route("/", get(move || async move { banner.to_string() }))
        .merge(login)
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()));

    let router = match cors_layer(&server.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::adapters::identity::MockIdentityProvider;
    use crate::adapters::token::MockTokenIssuer;
    use crate::domain::foundation::UserId;
    use crate::domain::login::{Credentials, UserRecord};
    use crate::ports::{IdentityError, IdentityProvider};

    fn alice() -> UserRecord {
        UserRecord::new(UserId::new("u1").unwrap(), "Alice", json!({}))
    }

    fn test_state() -> LoginAppState {
        LoginAppState::new(
            Arc::new(MockIdentityProvider::accepting(alice())),
            Arc::new(MockTokenIssuer::new()),
        )
    }

    /// Provider that never answers within the request timeout.
    struct StalledIdentityProvider;

    #[async_trait]
    impl IdentityProvider for StalledIdentityProvider {
        async fn login(&self, _credentials: &Credentials) -> Result<UserRecord, IdentityError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(alice())
        }
    }

    #[tokio::test]
    async fn root_serves_banner() {
        let server = ServerConfig::default();
        let app = app_router(test_state(), &server);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, server.banner.as_bytes());
    }

    #[tokio::test]
    async fn root_serves_custom_banner() {
        let server = ServerConfig {
            banner: "hello".to_string(),
            ..Default::default()
        };
        let app = app_router(test_state(), &server);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let app = app_router(test_state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn slow_request_times_out() {
        let state = LoginAppState::new(
            Arc::new(StalledIdentityProvider),
            Arc::new(MockTokenIssuer::new()),
        );
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..Default::default()
        };
        let app = app_router(state, &server);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proxy-login")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"email":"a@b.c","password":"pw"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn banner_is_served_while_login_capacity_is_exhausted() {
        let state = LoginAppState::new(
            Arc::new(StalledIdentityProvider),
            Arc::new(MockTokenIssuer::new()),
        );
        let server = ServerConfig {
            max_concurrent_requests: 1,
            ..Default::default()
        };
        let app = app_router(state, &server);

        let pending_login = tokio::spawn(app.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/proxy-login")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"email":"a@b.c","password":"pw"}"#))
                .unwrap(),
        ));
        tokio::time::sleep(Duration::from_millis(100)).await;

        let response = tokio::time::timeout(
            Duration::from_secs(1),
            app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()),
        )
        .await
        .expect("banner blocked behind login cap")
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        pending_login.abort();
    }

    #[tokio::test]
    async fn configured_origin_gets_cors_headers() {
        let server = ServerConfig {
            cors_origins: Some("https://app.example.com".to_string()),
            ..Default::default()
        };
        let app = app_router(test_state(), &server);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/proxy-login")
                    .header("origin", "https://app.example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("https://app.example.com")
        );
    }

    #[test]
    fn cors_layer_absent_without_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["https://app.example.com".to_string()]).is_some());
    }
}
