//! 환경 변수 기반 설정 모듈
//!
//! - [`data_config`] - 실행 프로필, bcrypt cost, 서버 바인딩과 Rate Limiting
//! - [`auth_config`] - 세션, OAuth 프로바이더

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
