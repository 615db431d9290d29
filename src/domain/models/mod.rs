//! 도메인 모델 모듈
//!
//! 영속되지 않는 도메인 값들입니다.
//!
//! - [`auth`] - 세션에 담기는 인증 주체와 인증 모드
//! - [`oauth`] - 외부 프로바이더 프로필

pub mod auth;
pub mod oauth;
