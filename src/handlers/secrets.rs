//! 비밀 공유 핸들러
//!
//! - `GET /` - 홈
//! - `GET /secrets` - 공유된 비밀 목록 (로그인 필요)
//! - `GET|POST /submit` - 비밀 제출 (로그인 필요, `SessionMiddleware::required`)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::AppContext;
use crate::domain::models::auth::{OptionalSessionUser, SessionUser};
use crate::domain::SubmitSecretForm;
use crate::errors::AppError;
use crate::handlers::{html, redirect};
use crate::views;

#[get("/")]
pub async fn home() -> HttpResponse {
    html(views::home_page())
}

/// 공유된 비밀 목록
///
/// 익명 사용자는 `/login`으로 보냅니다.
#[get("/secrets")]
pub async fn list_secrets(
    current: OptionalSessionUser,
    context: web::Data<AppContext>,
) -> HttpResponse {
    if !current.is_authenticated() {
        return redirect("/login");
    }

    match context.user_service.shared_secrets().await {
        Ok(secrets) => html(views::secrets_page(&secrets)),
        Err(e) => {
            log::error!("비밀 목록 조회 실패: {}", e);
            redirect("/login")
        }
    }
}

#[get("/submit", wrap = "crate::middlewares::SessionMiddleware::required()")]
pub async fn submit_page(_user: SessionUser) -> HttpResponse {
    html(views::submit_page())
}

/// 세션 사용자의 비밀을 저장(덮어쓰기)하고 `/secrets`로 리다이렉트합니다.
///
/// # Endpoint
/// `POST /submit`
#[post("/submit", wrap = "crate::middlewares::SessionMiddleware::required()")]
pub async fn submit_secret(
    user: SessionUser,
    context: web::Data<AppContext>,
    form: web::Form<SubmitSecretForm>,
) -> HttpResponse {
    if let Err(e) = form.validate() {
        log::warn!("비밀 입력 검증 실패: {}", e);
        return redirect("/submit");
    }

    match context.user_service.submit_secret(&user.id, &form.secret).await {
        Ok(_) => {
            log::info!("🤫 비밀 저장: 사용자 ID {}", user.id);
            redirect("/secrets")
        }
        Err(AppError::ValidationError(e)) => {
            log::warn!("비밀 입력 검증 실패: {}", e);
            redirect("/submit")
        }
        Err(e) => {
            log::error!("비밀 저장 실패 - 사용자 ID {}: {}", user.id, e);
            redirect("/login")
        }
    }
}
