//! 비밀 공유 서비스 메인 애플리케이션
//!
//! MongoDB, Redis 연결을 설정하고 인증 전략을 구성한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use secrets_service::caching::redis::RedisClient;
use secrets_service::config::{
    AuthProvider, OAuthProviderConfig, PasswordConfig, ServerConfig, SessionConfig,
};
use secrets_service::core::AppContext;
use secrets_service::db::Database;
use secrets_service::errors::AppError;
use secrets_service::repositories::sessions::session_repo::SessionRepository;
use secrets_service::repositories::users::user_repo::UserRepository;
use secrets_service::routes::configure_all_routes;
use secrets_service::services::auth::{LocalStrategy, OAuthStrategy, StrategyRegistry};
use secrets_service::services::users::UserService;
use secrets_service::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Secrets Service");
    info!("🚀 비밀 공유 서비스 시작중...");

    let context = build_context().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(context).await
}

/// 저장소, 서비스, 인증 전략을 연결해 애플리케이션 상태를 만듭니다.
async fn build_context() -> Result<web::Data<AppContext>, AppError> {
    print_step_start(1, "MongoDB 연결");
    let database = Database::new().await?;
    print_sub_task("database", database.database_name());
    let user_repo = UserRepository::new(database);
    user_repo.create_indexes().await?;
    let users = Arc::new(user_repo);
    print_step_complete(1, "MongoDB 연결");

    print_step_start(2, "Redis 세션 저장소 연결");
    let redis_client = RedisClient::new().await?;
    let session_config = SessionConfig::from_env()?;
    let sessions = Arc::new(SessionRepository::new(redis_client, session_config.clone()));
    print_sub_task("session ttl", &format!("{}s", session_config.ttl_seconds));
    print_step_complete(2, "Redis 세션 저장소 연결");

    print_step_start(3, "인증 전략 등록");
    let user_service = Arc::new(UserService::new(users.clone(), PasswordConfig::bcrypt_cost()));

    let mut strategies = StrategyRegistry::new();
    strategies.register(Arc::new(LocalStrategy::new(users)));
    print_sub_task(AuthProvider::Local.as_str(), "enabled");

    for provider in [AuthProvider::Google, AuthProvider::Facebook] {
        match OAuthProviderConfig::from_env(provider) {
            Some(config) => {
                info!("🔗 {} 콜백 URL: {}", provider.as_str(), config.callback_url);
                strategies.register(Arc::new(OAuthStrategy::new(config, user_service.clone())));
                print_sub_task(provider.as_str(), "enabled");
            }
            None => {
                warn!("{} 클라이언트 ID/Secret이 없어 로그인이 비활성화됩니다", provider.as_str());
                print_sub_task(provider.as_str(), "disabled");
            }
        }
    }
    print_step_complete(3, "인증 전략 등록");

    Ok(web::Data::new(AppContext::new(
        sessions,
        user_service,
        strategies,
        session_config,
    )))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<AppContext>) -> io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = &server_config.rate_limit;
    info!("Rate Limiting 설정 로드됨: {:?}", rate_limit_config);
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    print_startup_summary(&bind_address, &context.strategies.providers());

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes(context.clone()))
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                // 로컬 개발은 .env 하나만 두는 경우가 많음
                if dotenv().is_err() {
                    eprintln!(".env.dev 파일 로드 실패: {}", e);
                }
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=secrets_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
    info!("Current profile: {}", std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()));
}
