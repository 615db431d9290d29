//! OAuth 로그인 핸들러 (Google, Facebook)
//!
//! - `GET /auth/{provider}` - 일회용 state를 발급하고 프로바이더 인증 페이지로 이동
//! - `GET /auth/{provider}/secrets` - 콜백. state 확인 후 code로 로그인
//!
//! state는 로그인을 시작한 브라우저의 `HttpOnly` 쿠키에도 저장되며, 콜백은
//! 쿠키와 쿼리의 state가 같을 때만 처리됩니다. 로그인된 계정에 프로바이더를
//! 연결하는 것은 state를 발급받은 세션과 콜백 세션이 같을 때뿐입니다.
//!
//! 설정되지 않은 프로바이더나 실패한 콜백은 모두 `/login`으로 리다이렉트됩니다.
use actix_web::{get, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::config::{AuthProvider, SessionConfig};
use crate::core::AppContext;
use crate::domain::models::auth::OptionalSessionUser;
use crate::domain::OAuthCallbackQuery;
use crate::handlers::{
    oauth_state_cookie, oauth_state_removal_cookie, redirect, session_token, start_session,
};
use crate::services::auth::Credentials;

/// 경로의 프로바이더 이름을 외부 프로바이더로 해석합니다.
fn external_provider(name: &str) -> Option<AuthProvider> {
    match AuthProvider::from_str(name) {
        Ok(AuthProvider::Local) | Err(_) => None,
        Ok(provider) => Some(provider),
    }
}

/// OAuth 로그인 시작
///
/// # Endpoint
/// `GET /auth/{provider}`
#[get("/auth/{provider}")]
pub async fn begin_login(
    req: HttpRequest,
    path: web::Path<String>,
    current: OptionalSessionUser,
    context: web::Data<AppContext>,
) -> HttpResponse {
    let Some(provider) = external_provider(&path) else {
        log::warn!("지원하지 않는 프로바이더: {}", path);
        return redirect("/login");
    };

    let strategy = match context.strategies.get(provider) {
        Ok(strategy) => strategy,
        Err(e) => {
            log::warn!("{} 로그인이 설정되지 않았습니다: {}", provider.as_str(), e);
            return redirect("/login");
        }
    };

    // 유효한 세션으로 시작한 경우에만 세션에 묶음
    let issuing_session = session_token(&req).filter(|_| current.is_authenticated());

    let state = match context.sessions
        .issue_oauth_state(provider, issuing_session.as_deref())
        .await
    {
        Ok(state) => state,
        Err(e) => {
            log::error!("{} OAuth state 발급 실패: {}", provider.as_str(), e);
            return redirect("/login");
        }
    };

    let Some(url) = strategy.authorization_url(&state) else {
        log::error!("{} 전략이 인증 URL을 제공하지 않습니다", provider.as_str());
        return redirect("/login");
    };

    log::info!("🌐 {} 인증 페이지로 이동", provider.as_str());
    let mut response = redirect(&url);
    if let Err(e) = response.add_cookie(&oauth_state_cookie(&context.session_config, state)) {
        log::error!("OAuth state 쿠키 설정 실패: {}", e);
        return redirect("/login");
    }
    response
}

/// OAuth 콜백 처리
///
/// 결과와 관계없이 state 쿠키는 만료시킵니다.
///
/// # Endpoint
/// `GET /auth/{provider}/secrets?code={code}&state={state}`
#[get("/auth/{provider}/secrets")]
pub async fn callback(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    current: OptionalSessionUser,
    context: web::Data<AppContext>,
) -> HttpResponse {
    let mut response = complete_login(&req, &path, &query, current, &context).await;

    if let Err(e) = response.add_cookie(&oauth_state_removal_cookie(&context.session_config)) {
        log::error!("OAuth state 쿠키 제거 실패: {}", e);
    }
    response
}

/// state는 한 번만 사용할 수 있고, 발급한 프로바이더와 일치해야 합니다.
async fn complete_login(
    req: &HttpRequest,
    path: &str,
    query: &OAuthCallbackQuery,
    current: OptionalSessionUser,
    context: &AppContext,
) -> HttpResponse {
    let Some(provider) = external_provider(path) else {
        log::warn!("지원하지 않는 프로바이더 콜백: {}", path);
        return redirect("/login");
    };

    // 사용자가 거부했거나 프로바이더 에러
    if let Some(error) = &query.error {
        let description = query.error_description.as_deref().unwrap_or("인증이 취소되었습니다");
        log::warn!("{} OAuth 에러: {} - {}", provider.as_str(), error, description);
        return redirect("/login");
    }

    if let Err(e) = query.validate() {
        log::warn!("{} 콜백 파라미터 오류: {}", provider.as_str(), e);
        return redirect("/login");
    }

    let started_here = req
        .cookie(SessionConfig::OAUTH_STATE_COOKIE_NAME)
        .is_some_and(|cookie| !cookie.value().is_empty() && cookie.value() == query.state);
    if !started_here {
        log::warn!("{} 콜백 state가 이 브라우저에서 시작된 로그인이 아닙니다", provider.as_str());
        return redirect("/login");
    }

    let callback_session = session_token(req);
    let grant = match context.sessions
        .consume_oauth_state(&query.state, callback_session.as_deref())
        .await
    {
        Ok(Some(grant)) if grant.provider == provider => grant,
        Ok(Some(grant)) => {
            log::warn!(
                "OAuth state 프로바이더 불일치: 발급 {}, 콜백 {}",
                grant.provider.as_str(),
                provider.as_str()
            );
            return redirect("/login");
        }
        Ok(None) => {
            log::warn!("{} 콜백의 state가 유효하지 않거나 만료되었습니다", provider.as_str());
            return redirect("/login");
        }
        Err(e) => {
            log::error!("OAuth state 확인 실패: {}", e);
            return redirect("/login");
        }
    };

    let strategy = match context.strategies.get(provider) {
        Ok(strategy) => strategy,
        Err(e) => {
            log::warn!("{} 로그인이 설정되지 않았습니다: {}", provider.as_str(), e);
            return redirect("/login");
        }
    };

    let current_user_id = match current.0 {
        Some(user) if grant.same_session => Some(user.id),
        Some(user) => {
            log::warn!("다른 세션에서 시작된 {} 로그인이라 계정을 연결하지 않습니다: 사용자 ID {}", provider.as_str(), user.id);
            None
        }
        None => None,
    };

    let credentials = Credentials::AuthorizationCode {
        code: query.code.clone(),
        current_user_id,
    };

    let user = match strategy.authenticate(credentials).await {
        Ok(user) => user,
        Err(e) if e.is_conflict() => {
            log::warn!("{} 계정 생성/연결 충돌: {}", provider.as_str(), e);
            return redirect("/login");
        }
        Err(e) => {
            log::error!("{} 로그인 실패: {}", provider.as_str(), e);
            return redirect("/login");
        }
    };

    match start_session(context, req, &user).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("{} 로그인 세션 시작 실패: {}", provider.as_str(), e);
            redirect("/login")
        }
    }
}
