//! HTTP handlers for the login endpoint.
//!
//! These handlers connect Axum routes to the application layer command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::{LoginError, LoginErrorKind, ProxyLoginHandler};
use crate::ports::{IdentityProvider, TokenIssuer};

use super::dto::{ErrorResponse, ProxyLoginRequest, ProxyLoginResponse};

/// Body returned for every failure that is not the client's or the provider's.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the login routes.
///
/// Built once at startup; cloning only bumps the Arc counts.
#[derive(Clone)]
pub struct LoginAppState {
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl LoginAppState {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            identity_provider,
            token_issuer,
        }
    }

    pub fn proxy_login_handler(&self) -> ProxyLoginHandler {
        ProxyLoginHandler::new(self.identity_provider.clone(), self.token_issuer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /proxy-login - Exchange provider credentials for a custom token
///
/// The body is read raw so that a non-JSON content type or malformed JSON
/// yields the same 400 as missing fields.
pub async fn proxy_login(
    State(state): State<LoginAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, LoginApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let request = ProxyLoginRequest::from_body(content_type, &body);
    let handler = state.proxy_login_handler();

    let result = handler.handle(request.into()).await?;

    Ok((StatusCode::OK, Json(ProxyLoginResponse::from(result))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts login errors to HTTP responses.
#[derive(Debug)]
pub struct LoginApiError(LoginError);

impl From<LoginError> for LoginApiError {
    fn from(err: LoginError) -> Self {
        Self(err)
    }
}

impl IntoResponse for LoginApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.0.kind() {
            LoginErrorKind::Validation => (StatusCode::BAD_REQUEST, self.0.to_string()),
            // Provider text is passed through to the client as-is
            LoginErrorKind::Provider => {
                tracing::warn!(error = %self.0, "Login rejected by identity provider");
                (StatusCode::UNAUTHORIZED, self.0.to_string())
            }
            LoginErrorKind::Transport | LoginErrorKind::Issuer => {
                tracing::error!(error = %self.0, "Error in /proxy-login");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::ports::{IdentityError, IssuerError};

    fn status_of(err: LoginError) -> StatusCode {
        LoginApiError::from(err).into_response().status()
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = LoginError::MissingCredentials(ValidationError::empty_field("email"));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_errors_map_to_unauthorized() {
        assert_eq!(
            status_of(IdentityError::rejected(403, "locked").into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(IdentityError::malformed("no uid").into()),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn transport_and_issuer_errors_map_to_internal_error() {
        assert_eq!(
            status_of(IdentityError::transport("refused").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(IssuerError::Signing("bad key".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
