//! Axum router configuration for the login endpoint.

use axum::{routing::post, Router};

use super::handlers::{proxy_login, LoginAppState};

/// Create the login API router.
///
/// # Routes
///
/// - `POST /proxy-login` - Exchange provider credentials for a custom token
pub fn login_routes() -> Router<LoginAppState> {
    Router::new().route("/proxy-login", post(proxy_login))
}
