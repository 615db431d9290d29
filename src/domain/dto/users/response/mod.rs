//! 외부 프로바이더 응답 DTO

pub mod oauth_response;

pub use oauth_response::ProviderTokenResponse;
