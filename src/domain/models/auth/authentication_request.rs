/// 세션 미들웨어의 인증 요구 수준
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 세션이 없으면 `/login`으로 리다이렉트
    Required,
    /// 세션이 있으면 사용자 정보를 주입하고, 없으면 익명으로 진행
    Optional,
}
