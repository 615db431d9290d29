use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{http::header, web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::core::AppContext;
use crate::domain::models::auth::{AuthMode, SessionUser};

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            // 바깥 미들웨어가 이미 세션을 확인했으면 다시 조회하지 않음
            let already_resolved = req.extensions().contains::<SessionUser>();

            if !already_resolved {
                if let Some(user) = resolve_session(&req).await {
                    log::debug!("세션 확인: 사용자 ID {}", user.id);
                    req.extensions_mut().insert(user);
                }
            }

            let authenticated = req.extensions().contains::<SessionUser>();

            if mode == AuthMode::Required && !authenticated {
                log::debug!("인증 필요: {} → /login", req.path());
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, "/login"))
                    .finish();
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, response)
                    .map_into_right_body();
                return Ok(res);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 쿠키의 세션 토큰으로 세션 사용자를 찾습니다.
///
/// 쿠키가 없거나, 세션이 만료되었거나, 저장소 오류가 나면 익명으로 처리합니다.
async fn resolve_session(req: &ServiceRequest) -> Option<SessionUser> {
    let token = req.cookie(SessionConfig::COOKIE_NAME)?.value().to_string();
    if token.is_empty() {
        return None;
    }

    let Some(context) = req.app_data::<web::Data<AppContext>>() else {
        log::error!("AppContext가 등록되지 않아 세션을 확인할 수 없습니다");
        return None;
    };
    let sessions = context.sessions.clone();

    match sessions.get(&token).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("세션 조회 실패: {}", e);
            None
        }
    }
}
