//! 사용자 비즈니스 로직
//!
//! 회원가입, 비밀 공유, 프로바이더 find-or-create를 담당합니다.

use std::sync::Arc;
use bcrypt::hash;
use crate::{
    domain::{entities::users::user::User, models::oauth::ProviderProfile},
    errors::{AppError, ErrorContext},
    repositories::users::UserStore,
};

pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
        }
    }

    /// 로컬 계정 생성
    ///
    /// 사용자명이 이미 있으면 `ConflictError`. 사전 조회를 통과해도 동시
    /// 가입은 저장소의 유니크 제약에서 충돌로 보고됩니다.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError("사용자명과 비밀번호는 필수입니다".to_string()));
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let created_user = self.user_repo
            .create(User::new_local(username.to_string(), password_hash))
            .await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());
        Ok(created_user)
    }

    /// 공유 목록에 노출할 비밀들 (`secret`이 null이 아닌 사용자만)
    pub async fn shared_secrets(&self) -> Result<Vec<String>, AppError> {
        let users = self.user_repo.find_with_secrets().await?;
        Ok(users.into_iter().filter_map(|user| user.secret).collect())
    }

    /// 사용자의 비밀을 설정(덮어쓰기)합니다.
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> Result<User, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::ValidationError("비밀을 입력해주세요".to_string()));
        }

        self.user_repo
            .update_secret(user_id, secret)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 프로바이더 subject ID 기준 find-or-create
    ///
    /// 1. 해당 ID가 연결된 사용자가 있으면 그대로 반환
    /// 2. 로그인된 사용자(`current_user_id`)가 있으면 그 계정에 ID를 연결.
    ///    이미 같은 프로바이더의 다른 ID가 연결되어 있으면 `ConflictError`
    /// 3. 아니면 새 사용자 생성
    ///
    /// 같은 ID로 동시에 최초 로그인하면 한쪽만 생성되고 다른 쪽은
    /// `ConflictError`를 받습니다.
    pub async fn find_or_create_by_provider(
        &self,
        profile: &ProviderProfile,
        current_user_id: Option<&str>,
    ) -> Result<User, AppError> {
        let provider = profile.provider;

        if let Some(existing) = self.user_repo
            .find_by_provider_id(provider, &profile.subject_id)
            .await?
        {
            log::info!("{} 사용자 로그인: {}", provider.as_str(), profile.subject_id);
            return Ok(existing);
        }

        if let Some(user_id) = current_user_id {
            if let Some(linked) = self.user_repo
                .link_provider(user_id, provider, &profile.subject_id)
                .await?
            {
                log::info!("기존 계정에 {} 연결: 사용자 ID {}", provider.as_str(), user_id);
                return Ok(linked);
            }

            if self.user_repo.find_by_id(user_id).await?.is_some() {
                log::warn!(
                    "사용자 ID {}에 이미 다른 {} 계정이 연결되어 있습니다",
                    user_id,
                    provider.as_str()
                );
                return Err(AppError::ConflictError(format!(
                    "이미 다른 {} 계정이 연결되어 있습니다",
                    provider.as_str()
                )));
            }
            log::warn!("세션 사용자를 찾을 수 없어 새 계정을 만듭니다: {}", user_id);
        }

        log::info!("새 {} 사용자 등록: {}", provider.as_str(), profile.subject_id);
        self.user_repo
            .create(User::new_oauth(provider, profile.subject_id.clone()))
            .await
    }
}
