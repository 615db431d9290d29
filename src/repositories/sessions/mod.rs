//! 세션 저장소
//!
//! 클라이언트는 쿠키로 불투명한 랜덤 토큰만 가지고, 서버는 토큰의 해시를 키로
//! [`SessionUser`]를 보관합니다. OAuth 로그인 시작 시 발급한 일회용 `state`도
//! 같은 저장소에 짧은 TTL로 보관하며, 로그인된 상태에서 시작했다면 그 세션
//! 토큰의 해시를 함께 기록합니다.

pub mod session_repo;

#[cfg(test)]
pub mod memory_repo;

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use crate::config::AuthProvider;
use crate::domain::models::auth::SessionUser;
use crate::errors::AppError;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 새 세션을 만들고 클라이언트에 내려줄 토큰을 반환합니다.
    async fn create(&self, user: &SessionUser) -> Result<String, AppError>;

    /// 토큰에 해당하는 세션. 없거나 만료되었으면 `Ok(None)`.
    async fn get(&self, token: &str) -> Result<Option<SessionUser>, AppError>;

    async fn destroy(&self, token: &str) -> Result<(), AppError>;

    /// OAuth 로그인 시작 시 일회용 state를 발급합니다.
    ///
    /// `session_token`은 로그인된 상태에서 시작한 경우의 현재 세션 토큰입니다.
    async fn issue_oauth_state(
        &self,
        provider: AuthProvider,
        session_token: Option<&str>,
    ) -> Result<String, AppError>;

    /// state를 소비합니다. 발급된 적 없거나 이미 사용/만료되었으면 `Ok(None)`.
    ///
    /// `session_token`은 콜백 요청의 세션 토큰으로, 발급 당시의 세션과
    /// 같은지 [`OAuthStateGrant::same_session`]에 기록됩니다.
    async fn consume_oauth_state(
        &self,
        state: &str,
        session_token: Option<&str>,
    ) -> Result<Option<OAuthStateGrant>, AppError>;
}

/// 저장소에 보관되는 state 값
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthStateRecord {
    pub provider: AuthProvider,
    /// 시작한 세션 토큰의 해시. 익명으로 시작했으면 `None`.
    pub session_hash: Option<String>,
}

impl OAuthStateRecord {
    pub fn new(secret: &str, provider: AuthProvider, session_token: Option<&str>) -> Self {
        Self {
            provider,
            session_hash: session_token.map(|token| hash_session_token(secret, token)),
        }
    }

    /// 콜백 세션이 state를 발급받은 세션과 같으면 계정 연결을 허용합니다.
    pub fn grant(self, secret: &str, session_token: Option<&str>) -> OAuthStateGrant {
        let same_session = match (&self.session_hash, session_token) {
            (Some(issued), Some(token)) => *issued == hash_session_token(secret, token),
            _ => false,
        };

        OAuthStateGrant {
            provider: self.provider,
            same_session,
        }
    }
}

/// 소비된 state의 검증 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OAuthStateGrant {
    pub provider: AuthProvider,
    pub same_session: bool,
}

/// 쿠키에 담길 세션 토큰 (32바이트 랜덤, URL-safe base64)
pub fn generate_session_token() -> Result<String, AppError> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::InternalError(format!("세션 토큰 생성 실패: {}", e)))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

/// 저장소 키로 쓰이는 토큰 해시
///
/// 원본 토큰은 저장하지 않습니다. 서버 비밀값을 섞어 저장소 덤프만으로는
/// 쿠키 값을 역산할 수 없게 합니다.
pub fn hash_session_token(secret: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(token.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

pub fn generate_oauth_state() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
