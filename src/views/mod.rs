//! # 서버 사이드 HTML 뷰
//!
//! 페이지 문자열을 직접 조립합니다. 사용자 입력이나 저장된 값은 모두
//! [`escape_html`](crate::utils::string_utils::escape_html)을 거쳐 들어갑니다.
//!
//! - [`register`] - 헌혈자 등록 폼
//! - [`find`] - 검색 폼, 검색 결과, 연락 요청 폼

pub mod register;
pub mod find;

pub use register::render_register_page;
pub use find::{render_find_page, FindPage};

/// 공통 레이아웃으로 본문을 감쌉니다.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title} | Blood Donor Finder</title>
  <style>
    body {{ font-family: Arial, Helvetica, sans-serif; max-width: 760px; margin: 2rem auto; color: #222; }}
    nav a {{ margin-right: 1rem; }}
    label {{ display: block; margin-top: 0.6rem; }}
    .banner {{ padding: 0.6rem 1rem; border-radius: 4px; margin: 1rem 0; }}
    .banner.ok {{ background: #e6f4ea; }}
    .banner.fail {{ background: #fce8e6; }}
    .donor {{ border: 1px solid #ddd; border-radius: 4px; padding: 0.8rem; margin: 0.8rem 0; }}
    .empty {{ color: #666; }}
  </style>
</head>
<body>
  <nav><a href="/register">Register as donor</a><a href="/find">Find donors</a></nav>
  <h1>{title}</h1>
{body}
</body>
</html>
"#,
        title = title,
        body = body,
    )
}
