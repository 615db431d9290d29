//! 테스트용 인메모리 사용자 저장소
//!
//! MongoDB 구현과 동일하게 유니크 필드 중복 시 `ConflictError`를 반환합니다.

use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    config::AuthProvider,
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserStore,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn violates_unique(users: &[User], candidate: &User, skip: Option<ObjectId>) -> bool {
        let same = |a: &Option<String>, b: &Option<String>| a.is_some() && a == b;

        users.iter()
            .filter(|u| skip.is_none() || u.id != skip)
            .any(|u| {
                same(&u.username, &candidate.username)
                    || same(&u.google_id, &candidate.google_id)
                    || same(&u.facebook_id, &candidate.facebook_id)
            })
    }

    /// `apply`가 `false`를 반환하면 갱신 조건 불일치로 보고 `Ok(None)`.
    fn update_with<F>(&self, id: &str, apply: F) -> Result<Option<User>, AppError>
    where
        F: FnOnce(&mut User) -> bool,
    {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
        let mut users = self.users.lock().unwrap();

        let Some(index) = users.iter().position(|u| u.id == Some(object_id)) else {
            return Ok(None);
        };

        let mut updated = users[index].clone();
        if !apply(&mut updated) {
            return Ok(None);
        }
        updated.updated_at = DateTime::now();

        if Self::violates_unique(&users, &updated, Some(object_id)) {
            return Err(AppError::ConflictError("duplicate key".to_string()));
        }

        users[index] = updated.clone();
        Ok(Some(updated))
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if Self::violates_unique(&users, &user, None) {
            return Err(AppError::ConflictError("duplicate key".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username.as_deref() == Some(username)).cloned())
    }

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter()
            .find(|u| u.provider_id(provider) == Some(provider_user_id))
            .cloned())
    }

    async fn find_with_secrets(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| u.has_secret()).cloned().collect())
    }

    async fn update_secret(&self, id: &str, secret: &str) -> Result<Option<User>, AppError> {
        self.update_with(id, |u| {
            u.secret = Some(secret.to_string());
            true
        })
    }

    async fn link_provider(
        &self,
        id: &str,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.update_with(id, |u| {
            if u.provider_id(provider).is_some() {
                return false;
            }
            u.set_provider_id(provider, provider_user_id.to_string());
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_provider_id_uniqueness_is_enforced() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new_oauth(AuthProvider::Google, "g-1".to_string())).await.unwrap();

        let err = repo
            .create(User::new_oauth(AuthProvider::Google, "g-1".to_string()))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_link_provider_never_overwrites_existing_id() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(User::new_local("a".to_string(), "h".to_string())).await.unwrap();
        let id = user.id_string().unwrap();

        let linked = repo.link_provider(&id, AuthProvider::Google, "g-1").await.unwrap();
        assert_eq!(linked.unwrap().google_id.as_deref(), Some("g-1"));

        let replaced = repo.link_provider(&id, AuthProvider::Google, "g-2").await.unwrap();
        assert!(replaced.is_none());
        assert_eq!(repo.all()[0].google_id.as_deref(), Some("g-1"));
    }

    #[actix_web::test]
    async fn test_find_with_secrets_skips_null_secret() {
        let repo = InMemoryUserRepository::new();
        let with = repo.create(User::new_local("a".to_string(), "h".to_string())).await.unwrap();
        repo.create(User::new_local("b".to_string(), "h".to_string())).await.unwrap();

        repo.update_secret(&with.id_string().unwrap(), "I like tea").await.unwrap();

        let listed = repo.find_with_secrets().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].secret.as_deref(), Some("I like tea"));
    }
}
