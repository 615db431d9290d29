//! Redis 클라이언트
//!
//! JSON 직렬화된 값을 TTL과 함께 저장합니다. 세션과 OAuth state 저장소의
//! 백엔드로 사용됩니다.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;
use crate::errors::AppError;

/// 모든 요청이 복제해서 쓰는 연결 관리자
///
/// Redis 재시작이나 네트워크 단절 뒤에는 다음 명령에서 자동으로 재접속합니다.
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 접속하고 PING으로 확인합니다.
    pub async fn new() -> Result<Self, AppError> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Self::connect(&redis_url).await
    }

    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let mut conn = Client::open(redis_url)?
            .get_connection_manager()
            .await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { conn })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let raw: Option<String> = self.conn.clone().get(key).await?;
        raw.as_deref().map(decode).transpose()
    }

    /// 값을 읽으면서 동시에 삭제합니다 (GETDEL).
    ///
    /// 일회용 값(OAuth state)이 두 번 소비되지 않습니다.
    pub async fn take<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let raw: Option<String> = self.conn.clone().get_del(key).await?;
        raw.as_deref().map(decode).transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), AppError> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::RedisError(format!("{} 직렬화 실패: {}", key, e)))?;
        self.conn.clone().set_ex::<_, _, ()>(key, json, seconds).await?;
        Ok(())
    }

    pub async fn del(&self, key: &str) -> Result<(), AppError> {
        self.conn.clone().del::<_, ()>(key).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(json: &str) -> Result<T, AppError> {
    serde_json::from_str(json)
        .map_err(|e| AppError::RedisError(format!("저장된 값 역직렬화 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_invalid_url_is_reported_as_redis_error() {
        let result = RedisClient::connect("http://localhost:6379").await;
        assert!(matches!(result, Err(AppError::RedisError(_))));
    }

    #[test]
    fn test_decode_reports_corrupt_value() {
        let result: Result<Vec<String>, AppError> = decode("{not json");
        assert!(matches!(result, Err(AppError::RedisError(_))));
    }
}
