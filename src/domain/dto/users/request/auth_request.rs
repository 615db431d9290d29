//! 인증 요청관련 DTO
//!
//! 회원가입/로그인 폼과 OAuth 콜백 쿼리를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입과 로컬 로그인이 공유하는 폼
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl CredentialsForm {
    /// 사용자명 앞뒤 공백을 제거한 값
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }
}

/// OAuth 콜백 쿼리 파라미터 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 사용자가 동의를 거부했거나 프로바이더 에러가 발생한 경우
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_fail_validation() {
        let form = CredentialsForm {
            username: String::new(),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_err());

        let form = CredentialsForm {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_normalized_username_trims() {
        let form = CredentialsForm {
            username: "  alice ".to_string(),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.normalized_username(), "alice");
    }

    #[test]
    fn test_callback_query_requires_code_and_state() {
        let query = OAuthCallbackQuery {
            code: "abc".to_string(),
            state: String::new(),
            error: None,
            error_description: None,
        };
        assert!(query.validate().is_err());
    }
}
