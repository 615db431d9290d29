//! # HTTP Request Handlers Module
//!
//! 페이지 렌더링과 폼 처리를 담당하는 핸들러들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (HTML form, redirect)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   SessionMiddleware - 세션 쿠키 → SessionUser
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 위임 + 리다이렉트          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services / AuthStrategy - 비즈니스 로직          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB, Redis                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리 규칙
//!
//! 핸들러는 에러 응답 본문을 만들지 않습니다. 모든 실패는 로그로 남기고
//! 안전한 페이지(`/login`, `/register`, `/submit`)로 리다이렉트합니다.
//!
//! ## 모듈 구성
//! - **`auth`**: 회원가입, 로컬 로그인, 로그아웃
//! - **`oauth`**: Google/Facebook 로그인 시작과 콜백
//! - **`secrets`**: 홈, 비밀 목록, 비밀 제출

pub mod auth;
pub mod oauth;
pub mod secrets;

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{http::header, HttpRequest, HttpResponse};
use crate::config::SessionConfig;
use crate::core::AppContext;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::SessionUser;
use crate::errors::AppError;

/// `302 Found` 리다이렉트
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 요청 쿠키의 세션 토큰
pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SessionConfig::COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

fn max_age(seconds: u64) -> Duration {
    Duration::seconds(i64::try_from(seconds).unwrap_or(i64::MAX))
}

/// `HttpOnly; SameSite=Lax` 쿠키
///
/// Lax이므로 프로바이더에서 돌아오는 최상위 GET 리다이렉트에도 전송됩니다.
fn http_only_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    secure: bool,
    lifetime: Duration,
) -> Cookie<'static> {
    Cookie::build(name, value)
        .path(path)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(lifetime)
        .finish()
}

pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    http_only_cookie(
        SessionConfig::COOKIE_NAME,
        token,
        "/",
        config.cookie_secure,
        max_age(config.ttl_seconds),
    )
}

/// 브라우저의 세션 쿠키를 즉시 만료시키는 쿠키
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    http_only_cookie(SessionConfig::COOKIE_NAME, String::new(), "/", config.cookie_secure, Duration::ZERO)
}

/// OAuth 로그인을 시작한 브라우저에만 남는 state 쿠키 (`/auth` 경로 한정)
pub fn oauth_state_cookie(config: &SessionConfig, state: String) -> Cookie<'static> {
    http_only_cookie(
        SessionConfig::OAUTH_STATE_COOKIE_NAME,
        state,
        "/auth",
        config.cookie_secure,
        max_age(config.oauth_state_ttl_seconds),
    )
}

pub fn oauth_state_removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    http_only_cookie(
        SessionConfig::OAUTH_STATE_COOKIE_NAME,
        String::new(),
        "/auth",
        config.cookie_secure,
        Duration::ZERO,
    )
}

/// 인증된 사용자로 새 세션을 시작하고 `/secrets`로 리다이렉트합니다.
///
/// 요청에 기존 세션 토큰이 있으면 먼저 폐기합니다.
pub async fn start_session(
    context: &AppContext,
    req: &HttpRequest,
    user: &User,
) -> Result<HttpResponse, AppError> {
    let session_user = SessionUser::from_user(user)
        .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자입니다".to_string()))?;

    if let Some(previous) = session_token(req) {
        if let Err(e) = context.sessions.destroy(&previous).await {
            log::warn!("이전 세션 폐기 실패: {}", e);
        }
    }

    let token = context.sessions.create(&session_user).await?;
    log::info!("🔑 세션 시작: 사용자 ID {}", session_user.id);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/secrets"))
        .cookie(session_cookie(&context.session_config, token))
        .finish())
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 핸들러 테스트용 애플리케이션 구성

    use std::sync::{Arc, Mutex};
    use actix_web::{dev::ServiceResponse, web};
    use async_trait::async_trait;
    use crate::config::{AuthProvider, SessionConfig};
    use crate::core::AppContext;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::oauth::ProviderProfile;
    use crate::errors::AppError;
    use crate::repositories::sessions::memory_repo::InMemorySessionRepository;
    use crate::repositories::users::{memory_repo::InMemoryUserRepository, UserStore};
    use crate::services::auth::{AuthStrategy, Credentials, LocalStrategy, StrategyRegistry};
    use crate::services::users::UserService;

    /// 전체 라우트를 구성한 테스트 서비스
    macro_rules! init_app {
        ($test_app:expr) => {
            actix_web::test::init_service(
                actix_web::App::new()
                    .configure(crate::routes::configure_all_routes($test_app.context.clone())),
            )
            .await
        };
    }
    pub(crate) use init_app;

    /// 네트워크 없이 code를 subject ID로 그대로 쓰는 가짜 프로바이더
    pub struct FakeProviderStrategy {
        pub provider: AuthProvider,
        pub user_service: Arc<UserService>,
        pub codes_seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AuthStrategy for FakeProviderStrategy {
        fn provider(&self) -> AuthProvider {
            self.provider
        }

        fn authorization_url(&self, state: &str) -> Option<String> {
            Some(format!("https://provider.example/auth?state={}", state))
        }

        async fn authenticate(&self, credentials: Credentials) -> Result<User, AppError> {
            let Credentials::AuthorizationCode { code, current_user_id } = credentials else {
                return Err(AppError::ValidationError("code required".to_string()));
            };
            self.codes_seen.lock().unwrap().push(code.clone());

            let profile = ProviderProfile {
                provider: self.provider,
                subject_id: code,
                display_name: None,
            };
            self.user_service
                .find_or_create_by_provider(&profile, current_user_id.as_deref())
                .await
        }
    }

    pub struct TestApp {
        pub users: Arc<InMemoryUserRepository>,
        pub sessions: Arc<InMemorySessionRepository>,
        pub google: Arc<FakeProviderStrategy>,
        pub context: web::Data<AppContext>,
    }

    impl TestApp {
        /// 로컬 + Google(가짜) 전략을 등록한 컨텍스트. Facebook은 미설정 상태.
        pub fn new() -> Self {
            let users = Arc::new(InMemoryUserRepository::new());
            Self::with_store(users.clone(), users)
        }

        /// 서비스는 `store`를 거치고, 테스트는 `users`로 저장 결과를 확인합니다.
        pub fn with_store(users: Arc<InMemoryUserRepository>, store: Arc<dyn UserStore>) -> Self {
            let sessions = Arc::new(InMemorySessionRepository::new());
            let user_service = Arc::new(UserService::new(store.clone(), 4));

            let google = Arc::new(FakeProviderStrategy {
                provider: AuthProvider::Google,
                user_service: user_service.clone(),
                codes_seen: Mutex::new(Vec::new()),
            });

            let mut strategies = StrategyRegistry::new();
            strategies
                .register(Arc::new(LocalStrategy::new(store)))
                .register(google.clone());

            let context = web::Data::new(AppContext::new(
                sessions.clone(),
                user_service,
                strategies,
                SessionConfig {
                    secret: "test-secret".to_string(),
                    ttl_seconds: 3600,
                    oauth_state_ttl_seconds: 600,
                    cookie_secure: false,
                },
            ));

            Self { users, sessions, google, context }
        }
    }

    /// 응답의 세션 쿠키 값
    pub fn session_cookie_value<B>(res: &ServiceResponse<B>) -> Option<String> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == SessionConfig::COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
    }

    pub fn location<B>(res: &ServiceResponse<B>) -> String {
        res.headers()
            .get(actix_web::http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }
}
