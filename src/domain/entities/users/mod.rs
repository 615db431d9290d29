//! Users Entity Module
//!
//! 로컬 계정과 OAuth 계정을 하나의 문서 구조로 표현하는 [`User`](user::User)를
//! 정의합니다. 한 사용자가 로컬 비밀번호와 여러 프로바이더 ID를 동시에 가질 수
//! 있습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 로컬 사용자
//! let user = User::new_local("alice".to_string(), hashed_password);
//!
//! // Google 최초 로그인 사용자
//! let oauth_user = User::new_oauth(AuthProvider::Google, "1098...".to_string());
//! ```

pub mod user;
