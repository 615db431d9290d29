use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티 (`users` 컬렉션)
///
/// `None`인 선택 필드는 직렬화되지 않습니다. `username`, `google_id`,
/// `facebook_id`의 sparse 유니크 인덱스가 필드가 있는 문서에만 적용되도록
/// 하기 위함입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// 로컬 로그인 식별자. 프로바이더 전용 계정은 없습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// bcrypt 해시. 로컬 계정만 가집니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,

    /// 공유된 비밀. 설정되기 전까지 `None`이며 목록에 노출되지 않습니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 프로바이더 최초 로그인 시 생성되는 사용자
    pub fn new_oauth(provider: AuthProvider, provider_user_id: String) -> Self {
        let now = DateTime::now();

        let mut user = Self {
            id: None,
            username: None,
            password_hash: None, // OAuth 사용자는 비밀번호 없음
            google_id: None,
            facebook_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        };
        user.set_provider_id(provider, provider_user_id);
        user
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }

    pub fn set_provider_id(&mut self, provider: AuthProvider, provider_user_id: String) {
        match provider {
            AuthProvider::Local => {}
            AuthProvider::Google => self.google_id = Some(provider_user_id),
            AuthProvider::Facebook => self.facebook_id = Some(provider_user_id),
        }
    }

    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_has_credentials_only() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());

        assert_eq!(user.username.as_deref(), Some("alice"));
        assert!(user.password_hash.is_some());
        assert_eq!(user.provider_id(AuthProvider::Google), None);
        assert!(!user.has_secret());
    }

    #[test]
    fn test_new_oauth_user_sets_matching_provider_field() {
        let google = User::new_oauth(AuthProvider::Google, "g-1".to_string());
        assert_eq!(google.google_id.as_deref(), Some("g-1"));
        assert_eq!(google.facebook_id, None);
        assert_eq!(google.password_hash, None);

        let facebook = User::new_oauth(AuthProvider::Facebook, "f-1".to_string());
        assert_eq!(facebook.provider_id(AuthProvider::Facebook), Some("f-1"));
        assert_eq!(facebook.google_id, None);
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let user = User::new_oauth(AuthProvider::Google, "g-2".to_string());
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(doc.contains_key("google_id"));
        assert!(!doc.contains_key("facebook_id"));
        assert!(!doc.contains_key("username"));
        assert!(!doc.contains_key("secret"));
        assert!(!doc.contains_key("_id"));
    }
}
