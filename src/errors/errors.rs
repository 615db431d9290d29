//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror` 기반의 단일 에러 타입입니다.
//! 이 서비스는 HTML 폼 기반이므로 에러를 JSON 응답으로 노출하지 않습니다.
//! 핸들러는 에러를 로그로 남긴 뒤 안전한 경로(`/login`, `/register`)로
//! 리다이렉트합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn submit(service: &UserService, id: &str, secret: String) -> HttpResponse {
//!     match service.submit_secret(id, secret).await {
//!         Ok(_) => redirect("/secrets"),
//!         Err(e) => {
//!             log::error!("비밀 저장 실패: {}", e);
//!             redirect("/login")
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Redis error: {0}")]
    RedisError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (사용자명, 프로바이더 ID 중복)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 잘못된 자격 증명, 만료된 OAuth state 등
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::ConflictError(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::AuthenticationError(_))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::RedisError(e.to_string())
    }
}

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반은 `ConflictError`, 나머지는 `DatabaseError`
impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        if is_duplicate_key(&e) {
            AppError::ConflictError("이미 사용 중인 사용자명 또는 연결된 계정입니다".to_string())
        } else {
            AppError::DatabaseError(e.to_string())
        }
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 붙여 [`AppError::InternalError`]로 변환합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
