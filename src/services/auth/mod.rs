//! 인증 전략 모듈
//!
//! 로컬 비밀번호, Google, Facebook 세 가지 인증 방식을 하나의
//! [`AuthStrategy`] 인터페이스로 다룹니다. 각 전략은 자격 증명을 검증하고
//! 결과를 로컬 [`User`]로 정규화합니다.
//!
//! 전략들은 `main`에서 생성되어 [`StrategyRegistry`]에 담긴 뒤
//! 라우터 구성 시 명시적으로 주입됩니다. 전역 등록은 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut strategies = StrategyRegistry::new();
//! strategies.register(Arc::new(LocalStrategy::new(users.clone())));
//! if let Some(config) = OAuthProviderConfig::from_env(AuthProvider::Google) {
//!     strategies.register(Arc::new(OAuthStrategy::new(config, user_service.clone())));
//! }
//!
//! let user = strategies
//!     .get(AuthProvider::Local)?
//!     .authenticate(Credentials::Password { username, password })
//!     .await?;
//! ```

pub mod local_strategy;
pub mod oauth_strategy;

pub use local_strategy::LocalStrategy;
pub use oauth_strategy::OAuthStrategy;

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 전략에 전달되는 자격 증명
#[derive(Debug, Clone)]
pub enum Credentials {
    /// 로컬 로그인 폼
    Password { username: String, password: String },
    /// OAuth 콜백의 authorization code
    ///
    /// `current_user_id`는 이미 로그인된 세션의 사용자 ID이며, 있으면
    /// 새 계정을 만드는 대신 그 계정에 프로바이더 ID를 연결합니다.
    AuthorizationCode {
        code: String,
        current_user_id: Option<String>,
    },
}

/// "자격 증명 검증 후 사용자로 해석" 인터페이스
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 외부 프로바이더 인증 페이지 URL. 로컬 전략은 `None`.
    fn authorization_url(&self, _state: &str) -> Option<String> {
        None
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, AppError>;
}

/// 프로바이더별 전략 맵
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: HashMap<AuthProvider, Arc<dyn AuthStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 같은 프로바이더의 전략이 이미 있으면 교체합니다.
    pub fn register(&mut self, strategy: Arc<dyn AuthStrategy>) -> &mut Self {
        log::info!("🔐 인증 전략 등록: {}", strategy.provider().as_str());
        self.strategies.insert(strategy.provider(), strategy);
        self
    }

    pub fn get(&self, provider: AuthProvider) -> Result<Arc<dyn AuthStrategy>, AppError> {
        self.strategies
            .get(&provider)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!(
                "등록되지 않은 인증 전략입니다: {}", provider.as_str()
            )))
    }

    /// 등록된 프로바이더 목록 (순서 없음)
    pub fn providers(&self) -> Vec<AuthProvider> {
        self.strategies.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubStrategy(AuthProvider);

    #[async_trait]
    impl AuthStrategy for StubStrategy {
        fn provider(&self) -> AuthProvider {
            self.0
        }

        async fn authenticate(&self, _credentials: Credentials) -> Result<User, AppError> {
            Err(AppError::AuthenticationError("stub".to_string()))
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(StubStrategy(AuthProvider::Google)));

        assert_eq!(registry.providers(), vec![AuthProvider::Google]);
        assert!(registry.get(AuthProvider::Google).is_ok());
        assert!(matches!(
            registry.get(AuthProvider::Facebook),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_default_authorization_url_is_none() {
        let strategy = StubStrategy(AuthProvider::Local);
        assert_eq!(strategy.authorization_url("state"), None);
    }
}
