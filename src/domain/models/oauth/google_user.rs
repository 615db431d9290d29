use serde::Deserialize;

/// Google OpenID Connect userinfo 응답 (`/oauth2/v3/userinfo`)
///
/// `profile` 스코프만 요청하므로 이메일 필드는 없습니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub sub: String,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::models::oauth::ProviderProfile;

    #[test]
    fn test_google_userinfo_normalizes_to_profile() {
        let json = r#"{"sub":"1098","name":"Alice","picture":"https://x/y.png"}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        let profile = ProviderProfile::from(info);

        assert_eq!(profile.provider, AuthProvider::Google);
        assert_eq!(profile.subject_id, "1098");
        assert_eq!(profile.display_name.as_deref(), Some("Alice"));
    }
}
