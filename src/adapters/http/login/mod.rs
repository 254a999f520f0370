//! HTTP adapter for the login proxy endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, LoginUserResponse, ProxyLoginRequest, ProxyLoginResponse};
pub use handlers::{proxy_login, LoginApiError, LoginAppState, INTERNAL_ERROR_MESSAGE};
pub use routes::login_routes;
