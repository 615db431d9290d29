//! MongoDB 연결 관리 모듈
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="userDB"
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use std::env;
use log::info;
use crate::errors::AppError;

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "userDB";

/// 연결이 확인된 MongoDB 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// `MONGODB_URI`의 `DATABASE_NAME` 데이터베이스에 접속하고 `ping`으로 확인합니다.
    pub async fn new() -> Result<Self, AppError> {
        let uri = env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
        let name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let mut options = ClientOptions::parse(&uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let inner = Client::with_options(options)?.database(&name);
        inner.run_command(doc! { "ping": 1 }).await?;

        info!("✅ MongoDB 연결 성공: {}", name);
        Ok(Self { inner })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.inner.collection::<T>(name)
    }

    pub fn database_name(&self) -> &str {
        self.inner.name()
    }
}
