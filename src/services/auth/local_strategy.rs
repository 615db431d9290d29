//! 로컬 사용자명/비밀번호 전략

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::AuthProvider,
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserStore,
    services::auth::{AuthStrategy, Credentials},
};

const INVALID_CREDENTIALS: &str = "잘못된 사용자명 또는 비밀번호입니다";

pub struct LocalStrategy {
    users: Arc<dyn UserStore>,
}

impl LocalStrategy {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 저장된 bcrypt 해시와 비밀번호를 비교합니다.
    ///
    /// 사용자가 없거나 프로바이더 전용 계정이어도 같은 메시지로 실패하여
    /// 계정 존재 여부가 드러나지 않게 합니다.
    async fn verify_password(&self, username: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let user = self.users
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let Some(password_hash) = user.password_hash.as_deref() else {
            log::debug!("비밀번호가 없는 계정으로 로컬 로그인 시도: {}", username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", start_time.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}

#[async_trait]
impl AuthStrategy for LocalStrategy {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Local
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, AppError> {
        match credentials {
            Credentials::Password { username, password } => {
                self.verify_password(&username, &password).await
            }
            Credentials::AuthorizationCode { .. } => Err(AppError::ValidationError(
                "로컬 전략은 authorization code를 지원하지 않습니다".to_string(),
            )),
        }
    }
}
