//! Authentication HTTP Handlers
//!
//! 회원가입, 로컬 로그인, 로그아웃을 처리합니다.
//!
//! # Endpoints
//!
//! - `GET|POST /register` - 회원가입 폼과 계정 생성
//! - `GET|POST /login` - 로그인 폼과 로컬 인증
//! - `GET /logout` - 세션 폐기
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::AuthProvider;
use crate::core::AppContext;
use crate::domain::CredentialsForm;
use crate::handlers::{html, redirect, removal_cookie, session_token, start_session};
use crate::services::auth::Credentials;
use crate::views;

#[get("/register")]
pub async fn register_page() -> HttpResponse {
    html(views::register_page())
}

/// 회원가입 핸들러
///
/// 성공하면 바로 로그인 상태로 `/secrets`에 보내고, 실패하면 `/register`로 돌려보냅니다.
///
/// # Endpoint
/// `POST /register`
#[post("/register")]
pub async fn register(
    req: HttpRequest,
    context: web::Data<AppContext>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    if let Err(e) = form.validate() {
        log::warn!("회원가입 입력 검증 실패: {}", e);
        return redirect("/register");
    }

    let username = form.normalized_username();
    let user = match context.user_service.register(&username, &form.password).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("회원가입 실패 - 사용자: {}, 에러: {}", username, e);
            return redirect("/register");
        }
    };

    log::info!("✅ 회원가입 완료: {}", username);

    match start_session(&context, &req, &user).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("회원가입 후 세션 시작 실패: {}", e);
            redirect("/login")
        }
    }
}

#[get("/login")]
pub async fn login_page() -> HttpResponse {
    html(views::login_page())
}

/// 로컬 로그인 핸들러
///
/// 인증에 실패하면 세션 없이 `/login`으로 리다이렉트합니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    context: web::Data<AppContext>,
    form: web::Form<CredentialsForm>,
) -> HttpResponse {
    if let Err(e) = form.validate() {
        log::warn!("로그인 입력 검증 실패: {}", e);
        return redirect("/login");
    }

    let strategy = match context.strategies.get(AuthProvider::Local) {
        Ok(strategy) => strategy,
        Err(e) => {
            log::error!("로컬 인증 전략을 찾을 수 없습니다: {}", e);
            return redirect("/login");
        }
    };

    let username = form.normalized_username();
    let credentials = Credentials::Password {
        username: username.clone(),
        password: form.password.clone(),
    };

    let user = match strategy.authenticate(credentials).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("로그인 실패 - 사용자: {}, 에러: {}", username, e);
            return redirect("/login");
        }
    };

    match start_session(&context, &req, &user).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("로그인 세션 시작 실패: {}", e);
            redirect("/login")
        }
    }
}

/// 로그아웃 핸들러
///
/// 저장소의 세션을 먼저 지운 뒤 쿠키를 만료시키고 `/`로 리다이렉트합니다.
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(req: HttpRequest, context: web::Data<AppContext>) -> HttpResponse {
    if let Some(token) = session_token(&req) {
        match context.sessions.destroy(&token).await {
            Ok(()) => log::info!("👋 로그아웃 완료"),
            Err(e) => log::error!("세션 삭제 실패: {}", e),
        }
    }

    let mut response = redirect("/");
    if let Err(e) = response.add_cookie(&removal_cookie(&context.session_config)) {
        log::error!("세션 쿠키 제거 실패: {}", e);
    }
    response
}
