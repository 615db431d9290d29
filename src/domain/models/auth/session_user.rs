use std::future::{ready, Ready};
use actix_web::{http::header, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 세션에 저장되는 최소 사용자 정보
///
/// 세션 미들웨어가 요청 확장(extensions)에 넣어 두면 핸들러에서 추출자로
/// 꺼내 씁니다. 프로바이더 전용 계정은 `username`이 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: Option<String>,
}

impl SessionUser {
    /// 저장된 사용자로부터 세션 정보를 만듭니다.
    ///
    /// 아직 저장되지 않아 `_id`가 없는 사용자는 `None`입니다.
    pub fn from_user(user: &User) -> Option<Self> {
        Some(Self {
            id: user.id_string()?,
            username: user.username.clone(),
        })
    }
}

/// 인증 필수 추출자
///
/// 세션이 없으면 `/login`으로 리다이렉트하는 응답으로 실패합니다.
impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => {
                let redirect = HttpResponse::Found()
                    .insert_header((header::LOCATION, "/login"))
                    .finish();
                ready(Err(actix_web::error::InternalError::from_response(
                    "인증되지 않은 요청입니다",
                    redirect,
                )
                .into()))
            }
        }
    }
}

/// 인증 선택 추출자 (`isAuthenticated()` 확인용)
#[derive(Debug, Clone)]
pub struct OptionalSessionUser(pub Option<SessionUser>);

impl OptionalSessionUser {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for OptionalSessionUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<SessionUser>().cloned();
        ready(Ok(OptionalSessionUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_from_user_requires_persisted_id() {
        let mut user = User::new_local("alice".to_string(), "hash".to_string());
        assert!(SessionUser::from_user(&user).is_none());

        let id = ObjectId::new();
        user.id = Some(id);
        let session_user = SessionUser::from_user(&user).unwrap();

        assert_eq!(session_user.id, id.to_hex());
        assert_eq!(session_user.username.as_deref(), Some("alice"));
    }

    #[actix_web::test]
    async fn test_optional_extractor_reads_extensions() {
        let req = TestRequest::default().to_http_request();
        let anonymous = OptionalSessionUser::extract(&req).await.unwrap();
        assert!(!anonymous.is_authenticated());

        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(SessionUser {
            id: "abc".to_string(),
            username: None,
        });
        let signed_in = OptionalSessionUser::extract(&req).await.unwrap();
        assert!(signed_in.is_authenticated());
    }

    #[actix_web::test]
    async fn test_required_extractor_fails_without_session() {
        let req = TestRequest::default().to_http_request();
        let result = SessionUser::extract(&req).await;
        let response = result.unwrap_err().error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/login"
        );
    }
}
