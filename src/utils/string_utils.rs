//! # 문자열 유틸리티
//!
//! 뷰 렌더링과 메일 본문 작성에서 쓰는 문자열 처리 함수들입니다.

/// HTML 특수 문자를 엔티티로 이스케이프합니다.
///
/// `&`, `<`, `>`, `"`, `'` 다섯 문자를 변환하므로
/// 요소 내용과 따옴표로 감싼 속성 값 모두에 안전하게 넣을 수 있습니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(escape_html("<b>Kim & Lee</b>"), "&lt;b&gt;Kim &amp; Lee&lt;/b&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// 빈 문자열이면 대체값을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(or_placeholder("", "N/A"), "N/A");
/// assert_eq!(or_placeholder("O+", "N/A"), "O+");
/// ```
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
