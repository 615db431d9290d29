//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `username`, `google_id`, `facebook_id` sparse 유니크 인덱스
//! - **충돌 보고**: 중복 키 쓰기 실패는 `AppError::from`에서 `ConflictError`로 변환
//! - **단일 문서 원자성**: 갱신은 `find_one_and_update` 한 번으로 처리
//! - **연결 보존**: 프로바이더 ID는 필드가 없을 때만 연결되고 덮어쓰지 않음

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::user::User,
    errors::AppError,
    repositories::users::UserStore,
};

/// MongoDB 기반 사용자 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **ConflictError**: 유니크 인덱스 위반
#[derive(Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    fn provider_field(provider: AuthProvider) -> Result<&'static str, AppError> {
        provider.id_field().ok_or_else(|| {
            AppError::ValidationError("로컬 인증에는 프로바이더 ID가 없습니다".to_string())
        })
    }

    /// `filter`에 맞는 문서 하나를 갱신하고 갱신 후 문서를 반환합니다.
    async fn set_fields(&self, filter: Document, mut fields: Document) -> Result<Option<User>, AppError> {
        fields.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(filter, doc! { "$set": fields })
            .with_options(options)
            .await
            .map_err(AppError::from)
    }

    /// 유니크 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 필드가 없는 문서는 인덱스에서
    /// 제외되도록 sparse로 생성하므로, 프로바이더 전용 계정(사용자명 없음)이나
    /// 로컬 계정(프로바이더 ID 없음)이 여러 개여도 충돌하지 않습니다.
    ///
    /// 이미 중복 데이터가 있으면 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let unique_sparse = |field: &str| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(format!("{}_unique", field))
                    .build())
                .build()
        };

        self.collection()
            .create_indexes([
                unique_sparse("username"),
                unique_sparse("google_id"),
                unique_sparse("facebook_id"),
            ])
            .await?;

        log::info!("✅ users 인덱스 확인 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID를 확인할 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(AppError::from)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(AppError::from)
    }

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        let field = Self::provider_field(provider)?;

        self.collection()
            .find_one(doc! { field: provider_user_id })
            .await
            .map_err(AppError::from)
    }

    async fn find_with_secrets(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection()
            .find(doc! { "secret": { "$ne": null } })
            .await?;

        cursor
            .try_collect()
            .await
            .map_err(AppError::from)
    }

    async fn update_secret(&self, id: &str, secret: &str) -> Result<Option<User>, AppError> {
        let filter = doc! { "_id": Self::parse_id(id)? };
        self.set_fields(filter, doc! { "secret": secret }).await
    }

    async fn link_provider(
        &self,
        id: &str,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        let field = Self::provider_field(provider)?;
        let filter = doc! { "_id": Self::parse_id(id)?, field: { "$exists": false } };
        self.set_fields(filter, doc! { field: provider_user_id }).await
    }
}
