//! 인증 관련 설정
//!
//! 세션 쿠키, OAuth 프로바이더(Google, Facebook) 설정을 환경 변수에서 읽어옵니다.
//! 콜백 URL은 `PUBLIC_BASE_URL`을 기준으로 조합되므로 배포 호스트가 바뀌어도
//! 코드를 수정할 필요가 없습니다.
//!
//! # 환경 변수
//!
//! ```bash
//! SECRET=session-secret
//! SESSION_TTL_SECONDS=86400
//! PUBLIC_BASE_URL=http://localhost:3000
//!
//! CLIENT_ID=google-client-id
//! CLIENT_SECRET=google-client-secret
//! FACEBOOK_ID=facebook-app-id
//! FACEBOOK_SECRET=facebook-app-secret
//! ```

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

/// 인증 프로바이더 종류
///
/// `Local`은 사용자명/비밀번호, 나머지는 외부 OAuth 프로바이더입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AuthProvider {
    Local,

    Google,

    Facebook,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 사용자 문서에서 프로바이더 subject ID가 저장되는 필드명
    ///
    /// 로컬 인증은 외부 ID가 없으므로 `None`입니다.
    pub fn id_field(&self) -> Option<&'static str> {
        match self {
            AuthProvider::Local => None,
            AuthProvider::Google => Some("google_id"),
            AuthProvider::Facebook => Some("facebook_id"),
        }
    }
}

/// 세션 설정
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 세션 토큰 해시에 섞이는 서버 비밀값
    pub secret: String,
    pub ttl_seconds: u64,
    /// OAuth state와 state 쿠키의 수명
    pub oauth_state_ttl_seconds: u64,
    pub cookie_secure: bool,
}

impl SessionConfig {
    pub const COOKIE_NAME: &'static str = "secrets_session";
    pub const OAUTH_STATE_COOKIE_NAME: &'static str = "secrets_oauth_state";

    /// 세션 TTL 상한 (30일)
    pub const MAX_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;
    const DEFAULT_TTL_SECONDS: u64 = 86_400;
    const DEFAULT_SECRET: &'static str = "our-little-secret";

    /// # Errors
    ///
    /// 프로덕션 프로필에서 `SECRET`이 없으면 `InternalError`를 반환합니다.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = Self::resolve_secret(env::var("SECRET").ok(), Environment::current())?;

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            secret,
            ttl_seconds: Self::clamp_ttl(env::var("SESSION_TTL_SECONDS").ok().as_deref()),
            oauth_state_ttl_seconds: OAuthConfig::state_timeout_minutes() * 60,
            cookie_secure,
        })
    }

    fn resolve_secret(raw: Option<String>, profile: Environment) -> Result<String, AppError> {
        match raw.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if profile == Environment::Production => Err(AppError::InternalError(
                "프로덕션 환경에서는 SECRET을 반드시 설정해야 합니다".to_string(),
            )),
            None => {
                log::warn!("SECRET not set, using default (not secure for production!)");
                Ok(Self::DEFAULT_SECRET.to_string())
            }
        }
    }

    /// 1초 ~ [`Self::MAX_TTL_SECONDS`] 범위로 제한된 세션 TTL
    fn clamp_ttl(raw: Option<&str>) -> u64 {
        raw.and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(Self::DEFAULT_TTL_SECONDS)
            .min(Self::MAX_TTL_SECONDS)
    }
}

pub struct OAuthConfig;

impl OAuthConfig {
    pub const MAX_STATE_TIMEOUT_MINUTES: u64 = 60;

    /// 로그인 시작부터 콜백까지 허용하는 시간 (분, 1..=60)
    pub fn state_timeout_minutes() -> u64 {
        Self::clamp_state_timeout(env::var("OAUTH_STATE_TIMEOUT_MINUTES").ok().as_deref())
    }

    fn clamp_state_timeout(raw: Option<&str>) -> u64 {
        raw.and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(10)
            .clamp(1, Self::MAX_STATE_TIMEOUT_MINUTES)
    }

    pub fn public_base_url() -> String {
        env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string()
    }
}

/// 개별 OAuth 프로바이더 연결 정보
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub provider: AuthProvider,
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub scope: Option<String>,
}

impl OAuthProviderConfig {
    /// 환경 변수에서 프로바이더 설정을 읽습니다.
    ///
    /// 클라이언트 ID/시크릿이 없으면 `None`을 반환하며, 해당 프로바이더는
    /// 등록되지 않습니다.
    pub fn from_env(provider: AuthProvider) -> Option<Self> {
        let base_url = OAuthConfig::public_base_url();

        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => Some(Self {
                provider,
                client_id: env::var("CLIENT_ID").ok()?,
                client_secret: env::var("CLIENT_SECRET").ok()?,
                callback_url: format!("{}/auth/google/secrets", base_url),
                auth_uri: env::var("GOOGLE_AUTH_URI")
                    .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string()),
                token_uri: env::var("GOOGLE_TOKEN_URI")
                    .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
                userinfo_uri: env::var("GOOGLE_USERINFO_URI")
                    .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string()),
                scope: Some("profile".to_string()),
            }),
            AuthProvider::Facebook => Some(Self {
                provider,
                client_id: env::var("FACEBOOK_ID").ok()?,
                client_secret: env::var("FACEBOOK_SECRET").ok()?,
                callback_url: format!("{}/auth/facebook/secrets", base_url),
                auth_uri: env::var("FACEBOOK_AUTH_URI")
                    .unwrap_or_else(|_| "https://www.facebook.com/v3.2/dialog/oauth".to_string()),
                token_uri: env::var("FACEBOOK_TOKEN_URI")
                    .unwrap_or_else(|_| "https://graph.facebook.com/v3.2/oauth/access_token".to_string()),
                userinfo_uri: env::var("FACEBOOK_USERINFO_URI")
                    .unwrap_or_else(|_| "https://graph.facebook.com/v3.2/me?fields=id,name".to_string()),
                scope: None,
            }),
        }
    }
}
