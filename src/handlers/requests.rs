//! # Contact Request HTTP Handler
//!
//! `POST /request` - 요청자 정보를 헌혈자에게 메일로 전달합니다.

use actix_web::{post, web, HttpResponse};
use log::warn;
use crate::core::errors::AppResult;
use crate::domain::dto::donors::ContactRequestForm;
use crate::services::contact::ContactService;
use crate::services::mail::SentMail;
use super::{failure_location, redirect};

/// 연락 요청 결과의 리다이렉트 표현
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// `error` 쿼리에 들어갈 코드 (인코딩 전)
    Failed(String),
}

impl ContactOutcome {
    /// 결과를 담은 `/find` 경로
    pub fn location(&self) -> String {
        match self {
            ContactOutcome::Sent => "/find?sent=1".to_string(),
            ContactOutcome::Failed(code) => failure_location(code),
        }
    }
}

impl From<AppResult<SentMail>> for ContactOutcome {
    fn from(result: AppResult<SentMail>) -> Self {
        match result {
            Ok(_) => ContactOutcome::Sent,
            Err(e) => {
                warn!("연락 요청 실패: {}", e);
                ContactOutcome::Failed(e.error_code())
            }
        }
    }
}

/// 연락 요청
///
/// 결과는 항상 `/find`로의 리다이렉트이며 쿼리로만 구분됩니다.
///
/// | 결과 | Location |
/// |------|----------|
/// | 발송 성공 | `/find?sent=1` |
/// | 필드 누락 | `/find?sent=0&error=missing_parameters` |
/// | 헌혈자 없음 | `/find?sent=0&error=donor_not_found` |
/// | 조회 실패 | `/find?sent=0&error=db_error` |
/// | 전송 실패 | `/find?sent=0&error=<전송 에러 메시지>` |
#[post("/request")]
pub async fn request_contact(
    service: web::Data<ContactService>,
    form: web::Form<ContactRequestForm>,
) -> HttpResponse {
    let outcome = ContactOutcome::from(service.request_contact(form.into_inner()).await);
    redirect(&outcome.location())
}
