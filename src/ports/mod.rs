//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IdentityProvider` - Verifies credentials against the external login API
//! - `TokenIssuer` - Mints custom tokens bound to a provider user id

mod identity_provider;
mod token_issuer;

pub use identity_provider::{IdentityError, IdentityProvider, MALFORMED_RESPONSE_MESSAGE};
pub use token_issuer::{IssuerError, TokenIssuer};
