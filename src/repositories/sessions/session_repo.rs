//! Redis 기반 세션 저장소
//!
//! ## 키 패턴
//!
//! - 세션: `session:{sha256(secret:token)}` (TTL: `SESSION_TTL_SECONDS`)
//! - OAuth state: `oauth_state:{state}` → `{provider, session_hash}` (TTL: `OAUTH_STATE_TIMEOUT_MINUTES`)

use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    config::{AuthProvider, SessionConfig},
    domain::models::auth::SessionUser,
    errors::AppError,
    repositories::sessions::{
        generate_oauth_state, generate_session_token, hash_session_token, OAuthStateGrant,
        OAuthStateRecord, SessionStore,
    },
};

#[derive(Clone)]
pub struct SessionRepository {
    redis: RedisClient,
    config: SessionConfig,
}

impl SessionRepository {
    pub fn new(redis: RedisClient, config: SessionConfig) -> Self {
        Self { redis, config }
    }

    fn session_key(&self, token: &str) -> String {
        format!("session:{}", hash_session_token(&self.config.secret, token))
    }

    fn state_key(state: &str) -> String {
        format!("oauth_state:{}", state)
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn create(&self, user: &SessionUser) -> Result<String, AppError> {
        let token = generate_session_token()?;

        self.redis
            .set_with_expiry(&self.session_key(&token), user, self.config.ttl_seconds)
            .await?;

        log::debug!("세션 생성 - 사용자 ID: {}, ttl: {}초", user.id, self.config.ttl_seconds);
        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        self.redis.get::<SessionUser>(&self.session_key(token)).await
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.redis.del(&self.session_key(token)).await
    }

    async fn issue_oauth_state(
        &self,
        provider: AuthProvider,
        session_token: Option<&str>,
    ) -> Result<String, AppError> {
        let state = generate_oauth_state();
        let record = OAuthStateRecord::new(&self.config.secret, provider, session_token);

        self.redis
            .set_with_expiry(&Self::state_key(&state), &record, self.config.oauth_state_ttl_seconds)
            .await?;

        Ok(state)
    }

    async fn consume_oauth_state(
        &self,
        state: &str,
        session_token: Option<&str>,
    ) -> Result<Option<OAuthStateGrant>, AppError> {
        let record = self.redis.take::<OAuthStateRecord>(&Self::state_key(state)).await?;
        Ok(record.map(|record| record.grant(&self.config.secret, session_token)))
    }
}
