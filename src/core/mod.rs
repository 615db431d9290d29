//! # Core Module
//!
//! 애플리케이션 의존성 컨테이너를 제공합니다.
//!
//! ### [`context`] - 명시적 의존성 주입
//! - **AppContext**: 세션 저장소, 서비스, 인증 전략 맵을 묶은 공유 상태
//! - `main`에서 한 번 구성하여 라우터 생성 시 전달합니다
//! - 전역 레지스트리나 지연 초기화 싱글톤은 사용하지 않습니다
//!
//! ```rust,ignore
//! let context = AppContext::new(sessions, user_service, strategies, session_config);
//! App::new().configure(configure_all_routes(web::Data::new(context)))
//! ```

pub mod context;

pub use context::AppContext;
