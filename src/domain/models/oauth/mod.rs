//! 외부 OAuth 프로바이더 프로필 모델
//!
//! 프로바이더별 사용자 정보 응답을 공통 [`ProviderProfile`]로 정규화합니다.
//! 로컬 사용자와의 연결에는 subject ID만 사용됩니다.

pub mod google_user;
pub mod facebook_user;

pub use google_user::GoogleUserInfo;
pub use facebook_user::FacebookUserInfo;

use crate::config::AuthProvider;

/// 정규화된 프로바이더 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    /// 프로바이더 내에서 고유한 사용자 식별자
    pub subject_id: String,
    pub display_name: Option<String>,
}

impl From<GoogleUserInfo> for ProviderProfile {
    fn from(info: GoogleUserInfo) -> Self {
        Self {
            provider: AuthProvider::Google,
            subject_id: info.sub,
            display_name: info.name,
        }
    }
}

impl From<FacebookUserInfo> for ProviderProfile {
    fn from(info: FacebookUserInfo) -> Self {
        Self {
            provider: AuthProvider::Facebook,
            subject_id: info.id,
            display_name: info.name,
        }
    }
}
