//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 키/값 저장소입니다. 세션과 OAuth state처럼
//! 만료 시간이 있는 임시 데이터를 보관합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
