//! Login command handlers.

mod proxy_login;

pub use proxy_login::{
    LoginError, LoginErrorKind, ProxyLoginCommand, ProxyLoginHandler, ProxyLoginResult,
};
