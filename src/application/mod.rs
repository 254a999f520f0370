//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::login::{
    LoginError, LoginErrorKind, ProxyLoginCommand, ProxyLoginHandler, ProxyLoginResult,
};
