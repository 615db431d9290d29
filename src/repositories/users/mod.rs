//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`]는 서비스 계층이 의존하는 저장소 인터페이스이며,
//! 운영 환경에서는 MongoDB 기반 [`UserRepository`](user_repo::UserRepository)가
//! 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserStore, user_repo::UserRepository};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(database));
//! let user = store.find_by_provider_id(AuthProvider::Google, "1098").await?;
//! ```

pub mod user_repo;

#[cfg(test)]
pub mod memory_repo;

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 사용자 저장소 인터페이스
///
/// 모든 구현은 `username`, `google_id`, `facebook_id`의 유일성을 보장해야 하며,
/// 위반 시 [`AppError::ConflictError`]를 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 할당된 `_id`를 채워 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError>;

    /// `secret`이 설정된 모든 사용자
    async fn find_with_secrets(&self) -> Result<Vec<User>, AppError>;

    /// 비밀을 설정(덮어쓰기)합니다. 사용자가 없으면 `Ok(None)`.
    async fn update_secret(&self, id: &str, secret: &str) -> Result<Option<User>, AppError>;

    /// 기존 사용자에 프로바이더 ID를 연결합니다.
    ///
    /// 해당 프로바이더 필드가 비어 있을 때만 연결하며, 사용자가 없거나 이미
    /// 다른 ID가 연결되어 있으면 `Ok(None)`.
    async fn link_provider(
        &self,
        id: &str,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError>;
}
