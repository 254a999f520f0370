//! Auth Proxy - Login proxy for third-party credentials
//!
//! Accepts an email/password login, verifies it with an external identity
//! provider and answers with a custom token the client exchanges for a
//! platform session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
