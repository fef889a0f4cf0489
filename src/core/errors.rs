//! # Application Error Handling System
//!
//! 헌혈자 찾기 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 등록 요청처럼 HTTP 상태 코드로 응답해야 하는 경로에서 그대로 반환할 수 있습니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 리다이렉트 코드 | 발생 지점 |
//! |----------|-------------|-----------------|-----------|
//! | `DatabaseError` | 500 | `db_error` | 저장소 쿼리/연결 실패 |
//! | `NotFound` | 404 | `donor_not_found` | 헌혈자 조회 실패 |
//! | `ValidationError` | 400 | `missing_parameters` | 필수 필드 누락 |
//! | `DeliveryError` | 502 | 전송 에러 메시지 원문 | 메일 전송 실패 |
//! | `ExternalServiceError` | 502 | `unexpected` | 테스트 메일 계정 발급 실패 |
//! | `InternalError` | 500 | `unexpected` | 그 밖의 모든 오류 |
//!
//! ## 리다이렉트 변환
//!
//! 연락 요청(`POST /request`) 흐름은 HTTP 에러 상태를 쓰지 않고
//! `/find?sent=0&error=<code>` 로 리다이렉트합니다. 비즈니스 로직은
//! `AppResult`만 반환하고, 코드 변환은 [`AppError::error_code`]를 통해
//! 핸들러 경계에서만 수행합니다.
//!
//! ```rust,ignore
//! match contact_service.request_contact(form).await {
//!     Ok(_) => redirect("/find?sent=1"),
//!     Err(e) => redirect(&format!("/find?sent=0&error={}", urlencoding::encode(&e.error_code()))),
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 실패 원인에 대응하며, 원인 메시지를 문자열로 보존합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 관련 에러
    ///
    /// MySQL 연결 끊김, 쿼리 실행 실패, 행 디코딩 실패 등이 여기에 속합니다.
    /// 재시도나 재연결은 하지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청한 헌혈자가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 필수 입력값 누락
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 메일 전송 실패
    ///
    /// 메시지는 메일 전송 계층이 돌려준 원문이며, 리다이렉트 코드로 그대로 노출됩니다.
    #[error("{0}")]
    DeliveryError(String),

    /// 외부 서비스 에러 (테스트 메일 계정 발급 등)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 리다이렉트 쿼리의 `error` 파라미터에 들어갈 코드를 반환합니다.
    ///
    /// `DeliveryError`는 전송 계층의 메시지를 그대로 반환하며,
    /// URL 인코딩은 호출하는 쪽에서 수행합니다.
    pub fn error_code(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "db_error".to_string(),
            AppError::NotFound(_) => "donor_not_found".to_string(),
            AppError::ValidationError(_) => "missing_parameters".to_string(),
            AppError::DeliveryError(msg) if msg.is_empty() => "mail_error".to_string(),
            AppError::DeliveryError(msg) => msg.clone(),
            AppError::ExternalServiceError(_) | AppError::InternalError(_) => {
                "unexpected".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DeliveryError(_) | AppError::ExternalServiceError(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 저장소 에러는 내부 정보를 숨기고 `DB error` 본문만 돌려줍니다.
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::DatabaseError(_) => "DB error".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
