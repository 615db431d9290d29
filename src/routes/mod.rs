//! 라우트 설정 모듈
//!
//! 페이지 라우트를 하나의 세션 스코프로 묶어 등록합니다.
//!
//! # Session Middleware Usage
//!
//! ## 모든 페이지 (세션 선택)
//! 세션 쿠키가 유효하면 `SessionUser`가 주입되고, 아니면 익명으로 진행합니다.
//! ```rust,ignore
//! cfg.service(
//!     web::scope("")
//!         .wrap(SessionMiddleware::optional())
//!         .service(handlers::secrets::list_secrets)
//! );
//! ```
//!
//! ## 로그인 필수 페이지
//! 핸들러 단위로 `wrap`을 지정합니다. 세션이 없으면 핸들러가 실행되지 않고
//! `/login`으로 리다이렉트됩니다.
//! ```rust,ignore
//! #[post("/submit", wrap = "crate::middlewares::SessionMiddleware::required()")]
//! pub async fn submit_secret(user: SessionUser, ...) -> HttpResponse { ... }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let context = web::Data::new(AppContext::new(sessions, user_service, strategies, session_config));
//! let app = App::new().configure(configure_all_routes(context));
//! ```

use crate::core::AppContext;
use crate::handlers;
use crate::middlewares::SessionMiddleware;
use actix_web::web;
use serde_json::json;

/// 애플리케이션 상태를 등록하고 모든 라우트를 설정하는 구성 함수를 만듭니다.
///
/// 인증 전략과 저장소는 `context`를 통해서만 핸들러에 전달됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// HttpServer::new(move || {
///     App::new().configure(configure_all_routes(context.clone()))
/// })
/// ```
pub fn configure_all_routes(
    context: web::Data<AppContext>,
) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(context.clone());

        // Health check endpoint
        cfg.service(health_check);

        cfg.service(
            web::scope("")
                .wrap(SessionMiddleware::optional())
                .configure(configure_page_routes)
                .configure(configure_auth_routes),
        );
    }
}

/// 홈과 비밀 공유 라우트
///
/// - `GET /` - 홈
/// - `GET /secrets` - 비밀 목록 (익명이면 `/login`)
/// - `GET|POST /submit` - 비밀 제출 (세션 필수)
fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::secrets::home)
        .service(handlers::secrets::list_secrets)
        .service(handlers::secrets::submit_page)
        .service(handlers::secrets::submit_secret);
}

/// 인증 라우트
///
/// ## 로컬 인증
/// - `GET|POST /register` - 회원가입
/// - `GET|POST /login` - 로그인
/// - `GET /logout` - 로그아웃
///
/// ## OAuth (Google, Facebook)
/// - `GET /auth/{provider}` - 프로바이더 인증 페이지로 이동
/// - `GET /auth/{provider}/secrets` - 콜백
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -i -X POST http://localhost:3000/register \
///   -d 'username=user@example.com&password=password123'
///
/// # Google 로그인 시작
/// curl -i http://localhost:3000/auth/google
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register_page)
        .service(handlers::auth::register)
        .service(handlers::auth::login_page)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::oauth::begin_login)
        .service(handlers::oauth::callback);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "secrets_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "sessions": "Redis",
///     "auth_providers": ["facebook", "google", "local"]
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(context: web::Data<AppContext>) -> actix_web::HttpResponse {
    let mut providers: Vec<&str> = context
        .strategies
        .providers()
        .into_iter()
        .map(|provider| provider.as_str())
        .collect();
    providers.sort_unstable();

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "sessions": "Redis",
            "auth_providers": providers
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use crate::handlers::test_support::{init_app, TestApp};

    #[actix_web::test]
    async fn test_health_check_lists_registered_providers() {
        let t = TestApp::new();
        let app = init_app!(t);

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["features"]["auth_providers"], serde_json::json!(["google", "local"]));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let t = TestApp::new();
        let app = init_app!(t);

        let req = test::TestRequest::get().uri("/nope").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
