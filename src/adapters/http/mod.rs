//! HTTP adapters - REST API implementations.

pub mod login;
mod router;

// Re-export key types for convenience
pub use login::{login_routes, LoginAppState};
pub use router::app_router;
