//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 로컬 계정 생성과 비밀 공유 ([`users`])
//! - 로컬/Google/Facebook 인증 전략 ([`auth`])
//!
//! 서비스는 생성자로 저장소를 주입받으며 `main`에서 한 번 만들어
//! [`AppContext`](crate::core::context::AppContext)로 공유됩니다.

pub mod users;
pub mod auth;
