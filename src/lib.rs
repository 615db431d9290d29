//! 비밀 공유 서비스
//!
//! 서버 렌더링 방식의 익명 비밀 공유 웹 애플리케이션입니다.
//! 로컬 계정, Google, Facebook 로그인과 Redis 기반 세션을 제공합니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: 사용자명 + bcrypt 비밀번호
//! - **OAuth 2.0**: Google, Facebook 로그인 (find-or-create, 기존 계정 연결)
//! - **세션**: 불투명 쿠키 토큰, 서버 측 Redis 저장
//! - **비밀 공유**: 로그인한 사용자만 목록 조회와 제출 가능
//! - **MongoDB**: `users` 컬렉션에 사용자 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/폼 라우트 + 세션 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 위임, 리다이렉트, HTML 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Services/Auth   │ ← 비즈니스 로직, 인증 전략
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_service::core::AppContext;
//! use secrets_service::routes::configure_all_routes;
//!
//! let context = web::Data::new(AppContext::new(sessions, user_service, strategies, session_config));
//! HttpServer::new(move || App::new().configure(configure_all_routes(context.clone())))
//!     .bind(ServerConfig::from_env().bind_address())?
//!     .run()
//!     .await
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
