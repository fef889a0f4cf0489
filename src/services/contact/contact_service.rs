//! # 연락 요청 서비스 구현
//!
//! 요청자가 특정 헌혈자에게 연락을 요청하면 헌혈자 이메일로 소개 메일을 보냅니다.
//!
//! ```text
//! ContactRequestForm
//!      │ 필수 필드 확인 ────────────── ValidationError
//!      ▼
//! DonorRepository::find_by_id ──────── DatabaseError / NotFound
//!      │
//!      ▼
//! compose_notification
//!      │
//!      ▼
//! MailTransport::send_mail ─────────── DeliveryError
//!      │
//!      ▼
//! SentMail
//! ```
//!
//! 요청은 저장하지 않으며 중복 요청 방지, 재시도도 하지 않습니다.

use std::sync::Arc;
use log::{error, info};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::donors::ContactRequestForm;
use crate::repositories::donors::DonorRepository;
use crate::services::mail::{MailTransport, MailerMode, OutgoingMail, SentMail};
use crate::services::notifications::{compose_notification, NotificationDetails};

/// 연락 요청 비즈니스 로직
pub struct ContactService {
    donor_repo: Arc<dyn DonorRepository>,
    mailer: Arc<dyn MailTransport>,
}

impl ContactService {
    pub fn new(donor_repo: Arc<dyn DonorRepository>, mailer: Arc<dyn MailTransport>) -> Self {
        Self { donor_repo, mailer }
    }

    /// 메일러 동작 모드
    pub fn mailer_mode(&self) -> MailerMode {
        self.mailer.mode()
    }

    /// 연락 요청을 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - donor_id, needer_name, needer_phone 중 누락
    /// * `AppError::NotFound` - 헌혈자 없음 (정수가 아닌 donor_id 포함)
    /// * `AppError::DatabaseError` - 헌혈자 조회 실패
    /// * `AppError::DeliveryError` - 메일 전송 실패
    pub async fn request_contact(&self, form: ContactRequestForm) -> AppResult<SentMail> {
        let request = form.into_request()?;

        let donor_id: i64 = request.donor_id.trim().parse().map_err(|_| {
            AppError::NotFound(format!("donor {}", request.donor_id))
        })?;

        let donor = self
            .donor_repo
            .find_by_id(donor_id)
            .await
            .map_err(|e| {
                error!("DB error fetching donor: {}", e);
                e
            })?
            .ok_or_else(|| AppError::NotFound(format!("donor {}", donor_id)))?;

        let content = compose_notification(&NotificationDetails {
            donor_name: &donor.name,
            needer_name: &request.needer_name,
            needer_phone: &request.needer_phone,
            blood_group: &donor.blood_group,
            location: &donor.location,
        });

        let mail = OutgoingMail {
            to: donor.email,
            subject: content.subject,
            text: content.text,
            html: content.html,
        };

        let sent = self.mailer.send_mail(&mail).await.map_err(|e| {
            error!("Error sending mail: {}", e);
            e
        })?;

        info!("Mail sent: {} (donor id: {})", sent.message_id, donor_id);
        if let Some(preview_url) = &sent.preview_url {
            info!("Preview URL: {}", preview_url);
        }

        Ok(sent)
    }
}
