use std::sync::Arc;
use crate::{
    config::SessionConfig,
    repositories::sessions::SessionStore,
    services::{auth::StrategyRegistry, users::UserService},
};

/// 요청 핸들러와 미들웨어가 공유하는 애플리케이션 상태
///
/// 모든 필드는 불변 `Arc` 핸들이므로 워커 스레드 간 복제가 저렴합니다.
#[derive(Clone)]
pub struct AppContext {
    pub sessions: Arc<dyn SessionStore>,
    pub user_service: Arc<UserService>,
    pub strategies: StrategyRegistry,
    pub session_config: SessionConfig,
}

impl AppContext {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        user_service: Arc<UserService>,
        strategies: StrategyRegistry,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            sessions,
            user_service,
            strategies,
            session_config,
        }
    }
}
