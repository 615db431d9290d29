//! 데이터 액세스 계층
//!
//! - [`users`] - MongoDB `users` 컬렉션
//! - [`sessions`] - Redis 세션 및 OAuth state
//!
//! 각 저장소는 트레이트로 노출되며 `main`에서 구현체를 만들어
//! [`AppContext`](crate::core::context::AppContext)에 주입합니다.

pub mod users;
pub mod sessions;
