//! Login domain - credentials in, user record and custom token out.

mod credentials;
mod custom_token;
mod user_record;

pub use credentials::Credentials;
pub use custom_token::CustomToken;
pub use user_record::UserRecord;
