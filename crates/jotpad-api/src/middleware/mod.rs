//! HTTP middleware.

pub mod request_id;
pub mod security_headers;

pub use request_id::MakeRequestUuidV7;
pub use security_headers::{is_api_path, security_headers};
