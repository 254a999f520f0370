//! Token issuer adapters.
//!
//! Implementations of the `TokenIssuer` port:
//!
//! - `firebase` - Service-account signed custom tokens
//! - `mock` - Test implementation with predictable tokens

mod firebase;
mod mock;

pub use firebase::{
    CustomTokenClaims, FirebaseTokenIssuer, ServiceAccount, FIREBASE_AUDIENCE, MAX_UID_LENGTH,
};
pub use mock::MockTokenIssuer;
