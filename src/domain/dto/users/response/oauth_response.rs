use serde::Deserialize;

/// authorization code 교환 응답
///
/// Google과 Facebook 모두 `access_token`을 포함합니다. 프로필 조회에만
/// 쓰므로 나머지 필드는 읽지 않습니다.
#[derive(Debug, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: String,
}
