use serde::Deserialize;

/// Facebook Graph API `me` 응답
#[derive(Debug, Deserialize)]
pub struct FacebookUserInfo {
    /// 앱 범위 사용자 ID
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::models::oauth::ProviderProfile;

    #[test]
    fn test_facebook_me_without_name() {
        let info: FacebookUserInfo = serde_json::from_str(r#"{"id":"5521"}"#).unwrap();
        let profile = ProviderProfile::from(info);

        assert_eq!(profile.provider, AuthProvider::Facebook);
        assert_eq!(profile.subject_id, "5521");
        assert_eq!(profile.display_name, None);
    }
}
