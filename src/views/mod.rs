//! 서버 렌더링 HTML 페이지
//!
//! 템플릿 엔진 없이 인라인 HTML로 렌더링합니다. 사용자 입력은
//! 모두 [`html_escape`]를 거쳐 출력됩니다.

/// 모든 페이지 공통 스타일
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
        max-width: 760px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f5f5f5;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        text-align: center;
    }
    h1 { color: #333; }
    .lead { color: #666; }
    form { margin: 20px auto; max-width: 360px; text-align: left; }
    .form-group { margin: 15px 0; }
    label { display: block; font-weight: bold; margin-bottom: 5px; color: #333; }
    input[type="text"], input[type="password"] {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        box-sizing: border-box;
    }
    .btn {
        display: inline-block;
        padding: 10px 20px;
        margin: 4px;
        border: none;
        border-radius: 4px;
        background: #333;
        color: white;
        text-decoration: none;
        font-size: 14px;
        cursor: pointer;
    }
    .btn-light { background: #eee; color: #333; }
    .btn-google { background: #db4437; }
    .btn-facebook { background: #3b5998; }
    .secret-text { font-size: 1.4em; color: #444; margin: 18px 0; }
    .social { margin-top: 20px; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Secrets - {title}</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn social_buttons(verb: &str) -> String {
    format!(
        r#"        <div class="social">
            <a class="btn btn-google" href="/auth/google">{verb} with Google</a>
            <a class="btn btn-facebook" href="/auth/facebook">{verb} with Facebook</a>
        </div>"#
    )
}

pub fn home_page() -> String {
    layout(
        "Home",
        r#"        <h1>Secrets</h1>
        <p class="lead">Don't keep your secrets, share them anonymously!</p>
        <a class="btn btn-light" href="/register">Register</a>
        <a class="btn" href="/login">Login</a>"#,
    )
}

pub fn register_page() -> String {
    let body = format!(
        r#"        <h1>Register</h1>
        <form method="POST" action="/register">
            <div class="form-group">
                <label for="username">Email</label>
                <input type="text" id="username" name="username" required autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button class="btn" type="submit">Register</button>
        </form>
{social}"#,
        social = social_buttons("Sign Up"),
    );
    layout("Register", &body)
}

pub fn login_page() -> String {
    let body = format!(
        r#"        <h1>Login</h1>
        <form method="POST" action="/login">
            <div class="form-group">
                <label for="username">Email</label>
                <input type="text" id="username" name="username" required autofocus>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required>
            </div>
            <button class="btn" type="submit">Login</button>
        </form>
{social}"#,
        social = social_buttons("Sign In"),
    );
    layout("Login", &body)
}

/// 공유된 비밀 목록 페이지
pub fn secrets_page(secrets: &[String]) -> String {
    let items: String = secrets
        .iter()
        .map(|secret| format!(r#"        <p class="secret-text">{}</p>"#, html_escape(secret)))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"        <h1>You've Discovered My Secret!</h1>
{items}
        <hr>
        <a class="btn btn-light" href="/logout">Log Out</a>
        <a class="btn" href="/submit">Submit a Secret</a>"#
    );
    layout("Secrets", &body)
}

pub fn submit_page() -> String {
    layout(
        "Submit",
        r#"        <h1>Secrets</h1>
        <p class="lead">Don't keep your secrets, share them anonymously!</p>
        <form method="POST" action="/submit">
            <div class="form-group">
                <input type="text" name="secret" placeholder="What's your secret?" required maxlength="2000">
            </div>
            <button class="btn" type="submit">Submit</button>
        </form>"#,
    )
}

/// HTML 특수 문자 이스케이프
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#x27;y&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_secrets_page_escapes_each_secret() {
        let html = secrets_page(&["<b>bold</b>".to_string(), "plain".to_string()]);

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains(r#"<p class="secret-text">plain</p>"#));
        assert!(html.contains(r#"href="/logout""#));
    }

    #[test]
    fn test_forms_post_to_their_routes() {
        assert!(register_page().contains(r#"action="/register""#));
        assert!(login_page().contains(r#"action="/login""#));
        assert!(submit_page().contains(r#"action="/submit""#));
        assert!(login_page().contains(r#"href="/auth/google""#));
        assert!(register_page().contains(r#"href="/auth/facebook""#));
    }
}
