pub mod auth;
pub mod security_headers;

pub use auth::{AuthUser, AUTH_USER_HEADER};
pub use security_headers::security_headers_middleware;
