//! 인증 상태 모델

pub mod authentication_request;
pub mod session_user;

pub use authentication_request::AuthMode;
pub use session_user::{OptionalSessionUser, SessionUser};
