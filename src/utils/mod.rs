//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 서버 기동 과정 터미널 출력

pub mod display_terminal;
