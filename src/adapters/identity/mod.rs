//! Identity provider adapters.
//!
//! Implementations of the `IdentityProvider` port:
//!
//! - `web_api` - The web team's HTTP login API
//! - `mock` - Test implementation that doesn't require the external service

mod mock;
mod web_api;

pub use mock::MockIdentityProvider;
pub use web_api::{WebApiConfig, WebApiIdentityProvider};
