//! 세션 인증 미들웨어 모듈
//!
//! 쿠키의 세션 토큰을 검증하여 [`SessionUser`](crate::domain::models::auth::SessionUser)를
//! 요청 확장에 주입합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(SessionMiddleware::optional())          // 모든 요청: 세션이 있으면 주입
//!     .service(
//!         web::resource("/submit")
//!             .wrap(SessionMiddleware::required())  // 세션 없으면 /login 리다이렉트
//!             .route(web::get().to(secrets::submit_page)),
//!     )
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
