use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 세션 인증 미들웨어 팩토리
pub struct SessionMiddleware {
    mode: AuthMode,
}

impl SessionMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 세션이 없으면 `/login`으로 리다이렉트합니다.
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 세션이 있으면 주입하고, 없으면 익명으로 진행합니다.
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{cookie::Cookie, http::{header, StatusCode}, test, web, App, HttpResponse};
    use crate::config::SessionConfig;
    use crate::core::AppContext;
    use crate::domain::models::auth::{OptionalSessionUser, SessionUser};
    use crate::repositories::sessions::{memory_repo::InMemorySessionRepository, SessionStore};
    use crate::repositories::users::memory_repo::InMemoryUserRepository;
    use crate::services::{auth::StrategyRegistry, users::UserService};

    fn context(sessions: Arc<InMemorySessionRepository>) -> web::Data<AppContext> {
        let users = Arc::new(InMemoryUserRepository::new());
        web::Data::new(AppContext::new(
            sessions,
            Arc::new(UserService::new(users, 4)),
            StrategyRegistry::new(),
            SessionConfig {
                secret: "test".to_string(),
                ttl_seconds: 60,
                oauth_state_ttl_seconds: 60,
                cookie_secure: false,
            },
        ))
    }

    async fn whoami(user: OptionalSessionUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.id),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_mode_redirects_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(context(Arc::new(InMemorySessionRepository::new())))
                .wrap(SessionMiddleware::required())
                .route("/", web::get().to(whoami)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_optional_mode_injects_session_user() {
        let sessions = Arc::new(InMemorySessionRepository::new());
        let token = sessions
            .create(&SessionUser { id: "abc123".to_string(), username: None })
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(context(sessions))
                .wrap(SessionMiddleware::optional())
                .route("/", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(SessionConfig::COOKIE_NAME, token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "abc123");

        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(SessionConfig::COOKIE_NAME, "forged"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");
    }
}
