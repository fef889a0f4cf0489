//! 테스트용 메모리 구현
//!
//! 핸들러와 서비스 테스트에서 MySQL/SMTP 대신 주입합니다.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use actix_web::web;
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::donors::{Donor, NewDonor};
use crate::repositories::donors::DonorRepository;
use crate::services::contact::ContactService;
use crate::services::donors::DonorService;
use crate::services::mail::{MailTransport, MailerMode, OutgoingMail, SentMail};

/// 메모리 구현으로 서비스를 조립해 `App::app_data`에 넣을 값을 만듭니다.
pub fn app_data(
    repo: Arc<InMemoryDonorRepository>,
    mailer: Arc<RecordingMailTransport>,
) -> (web::Data<DonorService>, web::Data<ContactService>) {
    (
        web::Data::new(DonorService::new(repo.clone())),
        web::Data::new(ContactService::new(repo, mailer)),
    )
}

/// 메모리 헌혈자 저장소
///
/// 검색은 SQL과 같게 혈액형 완전 일치, 지역 부분 일치로 동작합니다.
#[derive(Default)]
pub struct InMemoryDonorRepository {
    donors: Mutex<Vec<Donor>>,
    failure: Mutex<Option<String>>,
    search_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl InMemoryDonorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출을 `DatabaseError`로 실패시킵니다.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Donor> {
        self.donors.lock().unwrap().clone()
    }

    fn check_failure(&self) -> AppResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn create(&self, donor: NewDonor) -> AppResult<i64> {
        self.check_failure()?;

        let mut donors = self.donors.lock().unwrap();
        let id = donors.len() as i64 + 1;
        donors.push(donor.with_id(id));
        Ok(id)
    }

    async fn search(&self, blood_group: &str, location: &str) -> AppResult<Vec<Donor>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        Ok(self
            .donors
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.blood_group == blood_group && d.location.contains(location))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Donor>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        Ok(self
            .donors
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }
}

/// 보낸 메일을 기록만 하는 전송 계층
pub struct RecordingMailTransport {
    sent: Mutex<Vec<OutgoingMail>>,
    failure: Option<String>,
    mode: MailerMode,
}

impl Default for RecordingMailTransport {
    fn default() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
            mode: MailerMode::TestAccount,
        }
    }
}

impl RecordingMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 발송이 주어진 메시지의 `DeliveryError`로 실패합니다.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn with_mode(mode: MailerMode) -> Self {
        Self { mode, ..Self::new() }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn send_mail(&self, mail: &OutgoingMail) -> AppResult<SentMail> {
        if let Some(message) = &self.failure {
            return Err(AppError::DeliveryError(message.clone()));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(mail.clone());

        Ok(SentMail {
            message_id: format!("<test-{}@example.com>", sent.len()),
            preview_url: match self.mode {
                MailerMode::TestAccount => {
                    Some(format!("https://ethereal.email/message/test-{}", sent.len()))
                }
                MailerMode::Smtp => None,
            },
        })
    }

    async fn verify(&self) -> AppResult<()> {
        match &self.failure {
            Some(message) => Err(AppError::DeliveryError(message.clone())),
            None => Ok(()),
        }
    }

    fn mode(&self) -> MailerMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_default_transport_records_in_test_account_mode() {
        let transport = RecordingMailTransport::default();
        let mail = OutgoingMail {
            to: "donor@example.com".into(),
            subject: "s".into(),
            text: "t".into(),
            html: "h".into(),
        };

        let sent = transport.send_mail(&mail).await.unwrap();

        assert_eq!(transport.mode(), MailerMode::TestAccount);
        assert!(sent.preview_url.is_some());
        assert_eq!(transport.sent(), vec![mail]);
    }
}
