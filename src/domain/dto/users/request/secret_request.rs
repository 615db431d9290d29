use serde::Deserialize;
use validator::Validate;

/// `/submit` 폼
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 2000, message = "비밀을 입력해주세요"))]
    pub secret: String,
}
