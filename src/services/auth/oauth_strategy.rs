//! OAuth 2.0 authorization code 전략 (Google, Facebook)
//!
//! 1. 로그인 시작: [`authorization_url`](AuthStrategy::authorization_url)로 리다이렉트
//! 2. 콜백: code를 액세스 토큰으로 교환
//! 3. 토큰으로 프로필 조회 후 subject ID 추출
//! 4. subject ID로 사용자 find-or-create

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::{AuthProvider, OAuthProviderConfig},
    domain::{
        dto::users::response::ProviderTokenResponse,
        entities::users::user::User,
        models::oauth::{FacebookUserInfo, GoogleUserInfo, ProviderProfile},
    },
    errors::AppError,
    services::{
        auth::{AuthStrategy, Credentials},
        users::UserService,
    },
};

pub struct OAuthStrategy {
    config: OAuthProviderConfig,
    http: reqwest::Client,
    user_service: Arc<UserService>,
}

impl OAuthStrategy {
    pub fn new(config: OAuthProviderConfig, user_service: Arc<UserService>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            user_service,
        }
    }

    fn provider_name(&self) -> &'static str {
        self.config.provider.as_str()
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> Result<ProviderTokenResponse, AppError> {
        let params = [
            ("code", auth_code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!(
                "{} 토큰 요청 실패: {}", self.provider_name(), e
            )))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패: {}", self.provider_name(), error_text
            )));
        }

        response
            .json::<ProviderTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!(
                "{} 토큰 응답 파싱 실패: {}", self.provider_name(), e
            )))
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<ProviderProfile, AppError> {
        let response = self.http
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!(
                "{} 사용자 정보 요청 실패: {}", self.provider_name(), e
            )))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패: {}", self.provider_name(), error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;

        parse_profile(self.config.provider, &body)
    }
}

/// 프로바이더별 사용자 정보 응답을 공통 프로필로 변환합니다.
pub fn parse_profile(provider: AuthProvider, body: &str) -> Result<ProviderProfile, AppError> {
    let parse_error = |e: serde_json::Error| {
        AppError::ExternalServiceError(format!("{} 사용자 정보 파싱 실패: {}", provider.as_str(), e))
    };

    let profile = match provider {
        AuthProvider::Google => serde_json::from_str::<GoogleUserInfo>(body)
            .map(ProviderProfile::from)
            .map_err(parse_error)?,
        AuthProvider::Facebook => serde_json::from_str::<FacebookUserInfo>(body)
            .map(ProviderProfile::from)
            .map_err(parse_error)?,
        AuthProvider::Local => {
            return Err(AppError::ValidationError("로컬 인증은 프로필이 없습니다".to_string()));
        }
    };

    if profile.subject_id.trim().is_empty() {
        return Err(AppError::ExternalServiceError(format!(
            "{} 프로필에 사용자 ID가 없습니다", provider.as_str()
        )));
    }

    Ok(profile)
}

#[async_trait]
impl AuthStrategy for OAuthStrategy {
    fn provider(&self) -> AuthProvider {
        self.config.provider
    }

    fn authorization_url(&self, state: &str) -> Option<String> {
        let mut params = vec![
            ("client_id", self.config.client_id.clone()),
            ("redirect_uri", self.config.callback_url.clone()),
            ("response_type", "code".to_string()),
            ("state", state.to_string()),
        ];
        if let Some(scope) = &self.config.scope {
            params.push(("scope", scope.clone()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Some(format!("{}?{}", self.config.auth_uri, query_string))
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, AppError> {
        let Credentials::AuthorizationCode { code, current_user_id } = credentials else {
            return Err(AppError::ValidationError(format!(
                "{} 전략은 비밀번호 로그인을 지원하지 않습니다", self.provider_name()
            )));
        };

        let token_response = self.exchange_code_for_token(&code).await?;
        let profile = self.fetch_profile(&token_response.access_token).await?;

        log::info!("{} 프로필 확인: subject {}", self.provider_name(), profile.subject_id);

        self.user_service
            .find_or_create_by_provider(&profile, current_user_id.as_deref())
            .await
    }
}
