//! # 사용자 관련 요청 DTO 모듈
//!
//! `application/x-www-form-urlencoded` 폼과 쿼리 파라미터를 구조화된 타입으로
//! 변환하고 `validator`로 검증합니다.

pub mod auth_request;
pub mod secret_request;

pub use auth_request::{CredentialsForm, OAuthCallbackQuery};
pub use secret_request::SubmitSecretForm;
