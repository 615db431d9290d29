//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 단계와 최종 요약을 터미널에 표시합니다.

use crate::config::AuthProvider;

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Secrets Service                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    for line in boxed_title(title) {
        println!("{}", line);
    }
}

fn boxed_title(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);
    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// `→ Step 1: MongoDB 연결`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: MongoDB 연결`
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 항목 상태
///
/// ```text
///    ├─ google: enabled
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 요약
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              🎉 SECRETS SERVICE READY             ║
/// ╚══════════════════════════════════════════════════╝
///    🌐 Listening: 0.0.0.0:3000
///    🔐 Login: local, google
/// ```
pub fn print_startup_summary(bind_address: &str, providers: &[AuthProvider]) {
    println!();
    print_boxed_title("🎉 SECRETS SERVICE READY");
    println!("   🌐 Listening: {}", bind_address);
    println!("   🔐 Login: {}", provider_list(providers));
    println!();
}

fn provider_list(providers: &[AuthProvider]) -> String {
    let mut names: Vec<&str> = providers.iter().map(|p| p.as_str()).collect();
    names.sort_unstable_by_key(|name| (*name != "local", *name));
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_lines_have_equal_width() {
        let lines = boxed_title("Secrets");
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();

        assert_eq!(widths, vec![BOX_WIDTH + 2; 3]);
        assert!(lines[1].contains("Secrets"));
    }

    #[test]
    fn test_provider_list_puts_local_first() {
        let list = provider_list(&[AuthProvider::Google, AuthProvider::Local, AuthProvider::Facebook]);
        assert_eq!(list, "local, facebook, google");
    }
}
