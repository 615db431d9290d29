//! 사용자 서비스 모듈
//!
//! [`UserService`](user_service::UserService)는 회원가입, 비밀 공유,
//! 프로바이더 계정 find-or-create를 제공합니다.

pub mod user_service;

pub use user_service::UserService;
