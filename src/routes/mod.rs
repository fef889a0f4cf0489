//! 라우트 설정 모듈
//!
//! 페이지 라우트와 헬스체크 엔드포인트를 애플리케이션에 등록합니다.
//! 핸들러가 쓰는 서비스(`DonorService`, `ContactService`)는 호출하는 쪽에서
//! `App::app_data`로 먼저 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(donor_service))
//!     .app_data(web::Data::new(contact_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use crate::services::contact::ContactService;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_donor_routes(cfg);
    configure_request_routes(cfg);
}

/// 헌혈자 등록/검색 페이지
///
/// - `GET /` - `/register`로 리다이렉트
/// - `GET /register` - 등록 폼
/// - `POST /register` - 헌혈자 등록
/// - `GET /find` - 검색 폼과 결과
fn configure_donor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::donors::index)
        .service(handlers::donors::register_page)
        .service(handlers::donors::register_donor)
        .service(handlers::donors::find_donors);
}

/// 연락 요청
///
/// ```bash
/// curl -i -X POST http://localhost:3000/request \
///   -d 'donor_id=1&needer_name=Jisoo&needer_phone=010-1234-5678'
/// ```
fn configure_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::requests::request_contact);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "blood_donor_finder",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MySQL",
///     "mailer": "smtp"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(contact: web::Data<ContactService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MySQL",
            "mailer": contact.mailer_mode().as_str()
        }
    }))
}
