//! 애플리케이션 전역 에러 모듈
//!
//! 모든 계층이 공유하는 [`AppError`](errors::AppError)를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
