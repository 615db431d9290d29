//! # Data Transfer Objects
//!
//! HTML 폼과 OAuth 콜백 쿼리, 외부 프로바이더 응답을 매핑하는 타입들입니다.
//! 폼 필드는 `#[serde(default)]`로 선언되어 누락된 필드도 빈 문자열로
//! 역직렬화되고, 이후 `validator` 검증 단계에서 걸러집니다.

pub mod users;

pub use users::*;
