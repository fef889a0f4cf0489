//! # 메일 전송 모듈
//!
//! 서비스 계층은 [`MailTransport`] trait에만 의존합니다.
//!
//! - [`smtp_mailer`] - lettre 기반 SMTP 구현과 시작 시점 초기화/검증
//! - [`test_account`] - SMTP 자격 증명이 없을 때 쓰는 Ethereal 일회용 계정 발급
//!
//! ## 초기화 흐름
//!
//! ```text
//! MailConfig::from_env()
//!      │
//!      ├─ SMTP_HOST/USER/PASS 모두 있음 ──▶ SMTP 전송 (MailerMode::Smtp)
//!      │
//!      └─ 하나라도 없음 ──▶ Ethereal 계정 발급 ──▶ SMTP 전송 (MailerMode::TestAccount)
//!                                                   │
//!                                  verify() 실패 시 로그만 남기고 계속 진행
//! ```

pub mod smtp_mailer;
pub mod test_account;

use async_trait::async_trait;
use crate::core::errors::AppResult;

pub use smtp_mailer::{initialize_mailer, verify_transport, SmtpMailer};

/// 발송할 메일 한 통
///
/// 발신자/회신 주소는 전송 계층이 설정에서 채웁니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// 발송 결과
#[derive(Debug, Clone, PartialEq)]
pub struct SentMail {
    pub message_id: String,
    /// 테스트 계정 모드에서만 채워지는 미리보기 링크
    pub preview_url: Option<String>,
}

/// 메일러 동작 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailerMode {
    /// 환경 변수로 설정된 실제 SMTP 서버
    Smtp,
    /// Ethereal 일회용 테스트 계정 (실제 수신자에게 전달되지 않음)
    TestAccount,
}

impl MailerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailerMode::Smtp => "smtp",
            MailerMode::TestAccount => "test_account",
        }
    }
}

/// 메일 전송 계층 추상화
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// 메일을 한 번 발송합니다. 재시도하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DeliveryError` - 주소 파싱 실패 또는 SMTP 전송 실패
    async fn send_mail(&self, mail: &OutgoingMail) -> AppResult<SentMail>;

    /// 전송 서버에 접속 가능한지 확인합니다.
    async fn verify(&self) -> AppResult<()>;

    fn mode(&self) -> MailerMode;
}
