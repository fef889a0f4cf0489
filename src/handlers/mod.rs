//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 서비스는 `web::Data`로 주입받으며, 핸들러는 폼/쿼리 추출과 응답 변환만 담당합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 핸들러 | 응답 |
//! |--------|------|--------|------|
//! | `GET` | `/` | [`donors::index`] | 302 → `/register` |
//! | `GET` | `/register` | [`donors::register_page`] | 등록 폼 HTML |
//! | `POST` | `/register` | [`donors::register_donor`] | 302 → `/find`, 저장 실패 시 500 |
//! | `GET` | `/find` | [`donors::find_donors`] | 검색 페이지 HTML |
//! | `POST` | `/request` | [`requests::request_contact`] | 302 → `/find?sent=..` |
//!
//! ## 결과 전달 방식
//!
//! 연락 요청의 성공/실패는 HTTP 상태 코드가 아니라 리다이렉트 쿼리로만 전달됩니다.
//!
//! ```text
//! 성공  → /find?sent=1
//! 실패  → /find?sent=0&error=<AppError::error_code()>
//! ```

pub mod donors;
pub mod requests;

use actix_web::http::header;
use actix_web::HttpResponse;

/// `302 Found` 리다이렉트 응답
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// HTML 페이지 응답
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// 실패 결과를 담은 검색 페이지 경로
pub(crate) fn failure_location(code: &str) -> String {
    format!("/find?sent=0&error={}", urlencoding::encode(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_location_encodes_code() {
        assert_eq!(failure_location("db_error"), "/find?sent=0&error=db_error");
        assert_eq!(
            failure_location("Connection refused & closed"),
            "/find?sent=0&error=Connection%20refused%20%26%20closed"
        );
    }

    #[test]
    fn test_redirect_sets_location() {
        let response = redirect("/find");
        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/find");
    }
}
