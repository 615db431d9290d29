//! 서버 바인딩, Rate Limiting, 비밀번호 해싱 설정
//!
//! 모든 값은 시작 시점에 한 번 환경 변수에서 읽습니다. 잘못된 값은
//! 로그를 남기고 기본값으로 대체합니다.

use std::env;
use std::str::FromStr;

/// 실행 프로필
///
/// `ENVIRONMENT`가 비어 있거나 알 수 없는 값이면 가장 보수적인
/// `Production`으로 취급합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            _ => Environment::Production,
        }
    }

    /// 프로필별 bcrypt 기본 cost
    fn default_bcrypt_cost(self) -> u32 {
        match self {
            Environment::Development | Environment::Test => 4,
            Environment::Production => 12,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// `BCRYPT_COST` 또는 현재 프로필의 기본 cost
    pub fn bcrypt_cost() -> u32 {
        Self::resolve_cost(env::var("BCRYPT_COST").ok().as_deref(), Environment::current())
    }

    fn resolve_cost(raw: Option<&str>, profile: Environment) -> u32 {
        let fallback = profile.default_bcrypt_cost();
        let Some(raw) = raw else {
            return fallback;
        };

        match raw.trim().parse::<u32>() {
            Ok(cost) if (Self::MIN_COST..=Self::MAX_COST).contains(&cost) => cost,
            _ => {
                log::warn!(
                    "BCRYPT_COST={} 는 {}..={} 범위가 아닙니다. 기본값 {} 사용",
                    raw, Self::MIN_COST, Self::MAX_COST, fallback
                );
                fallback
            }
        }
    }
}

/// 요청 제한 설정 (actix-governor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 100,
            burst_size: 200,
        }
    }
}

/// HTTP 서버 설정
///
/// # Environment Variables
///
/// * `HOST` - 바인딩 호스트 (기본값: `0.0.0.0`)
/// * `PORT` - 바인딩 포트 (기본값: `3000`)
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = RateLimitConfig::default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            rate_limit: RateLimitConfig {
                per_second: env_or("RATE_LIMIT_PER_SECOND", defaults.per_second),
                burst_size: env_or("RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 환경 변수를 파싱하고, 없거나 잘못된 값이면 기본값을 돌려줍니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
