//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `login` - Credentials, provider user records and custom tokens

pub mod foundation;
pub mod login;
