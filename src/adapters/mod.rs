//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum router exposing the login proxy
//! - `identity` - Identity provider clients (web API, mock)
//! - `token` - Custom token issuers (service account signer, mock)

pub mod http;
pub mod identity;
pub mod token;
