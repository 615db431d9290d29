//! 도메인 계층
//!
//! - [`entities`] - MongoDB에 저장되는 `User`
//! - [`dto`] - HTML 폼, OAuth 콜백 쿼리, 프로바이더 응답
//! - [`models`] - 세션 사용자, 프로바이더 프로필

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
