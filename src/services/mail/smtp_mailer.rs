//! # SMTP 메일러 구현
//!
//! lettre의 비동기 SMTP 전송을 감싸 [`MailTransport`]를 구현합니다.
//! 프로세스 시작 시 한 번 만들어지며 이후 모든 요청이 공유합니다.

use std::time::Duration;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{error, info, warn};
use uuid::Uuid;
use crate::config::{MailConfig, SenderIdentity};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use super::test_account::{self, create_test_account};
use super::{MailTransport, MailerMode, OutgoingMail, SentMail};

/// lettre 기반 SMTP 메일러
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: SenderIdentity,
    mode: MailerMode,
    /// 테스트 계정 모드의 미리보기 기본 URL
    preview_base: Option<String>,
}

/// SMTP 접속 파라미터
struct TransportSettings<'a> {
    host: &'a str,
    port: u16,
    secure: bool,
    user: &'a str,
    pass: &'a str,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
}

fn build_transport(settings: &TransportSettings<'_>) -> AppResult<AsyncSmtpTransport<Tokio1Executor>> {
    let tls_parameters = TlsParameters::builder(settings.host.to_string())
        .dangerous_accept_invalid_certs(settings.accept_invalid_certs)
        .build()
        .context("TLS 설정 생성 실패")?;

    let tls = if settings.secure {
        Tls::Wrapper(tls_parameters)
    } else {
        Tls::Opportunistic(tls_parameters)
    };

    let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.host)
        .port(settings.port)
        .tls(tls)
        .credentials(Credentials::new(
            settings.user.to_string(),
            settings.pass.to_string(),
        ))
        .timeout(settings.timeout)
        .build();

    Ok(transport)
}

/// 설정에 따라 메일러를 초기화합니다.
///
/// 자격 증명이 모두 있으면 설정된 SMTP 서버를, 없으면 Ethereal 테스트 계정을 사용합니다.
///
/// # Errors
///
/// * `AppError::ExternalServiceError` - 테스트 계정 발급 실패
/// * `AppError::InternalError` - TLS 파라미터 생성 실패
pub async fn initialize_mailer(config: &MailConfig) -> AppResult<SmtpMailer> {
    if let Some(smtp) = &config.smtp {
        let transport = build_transport(&TransportSettings {
            host: &smtp.host,
            port: smtp.port,
            secure: smtp.secure,
            user: &smtp.user,
            pass: &smtp.pass,
            accept_invalid_certs: !config.tls_reject_unauthorized,
            timeout: Some(config.connection_timeout),
        })?;

        info!("📧 SMTP 전송 설정 완료: {}:{}", smtp.host, smtp.port);

        return Ok(SmtpMailer {
            transport,
            sender: config.sender.clone(),
            mode: MailerMode::Smtp,
            preview_base: None,
        });
    }

    warn!("SMTP 환경 변수 누락 - 개발용 Ethereal 테스트 계정을 생성합니다");

    let account = create_test_account().await?;
    let transport = build_transport(&TransportSettings {
        host: &account.smtp_host,
        port: account.smtp_port,
        secure: account.smtp_secure,
        user: &account.user,
        pass: &account.pass,
        accept_invalid_certs: false,
        timeout: None,
    })?;

    info!("📧 Ethereal 계정 준비 완료. 발송 시 미리보기 링크가 로그에 출력됩니다");

    Ok(SmtpMailer {
        transport,
        sender: config.sender.clone(),
        mode: MailerMode::TestAccount,
        preview_base: Some(account.web_url),
    })
}

/// 전송 서버 접속을 확인하고 결과를 로그로 남깁니다.
///
/// 실패해도 에러를 반환하지 않으므로 서버는 메일 없이도 기동됩니다.
pub async fn verify_transport(mailer: &dyn MailTransport) {
    match mailer.verify().await {
        Ok(()) => info!("✅ SMTP 전송 검증 완료 ({})", mailer.mode().as_str()),
        Err(e) => error!("SMTP 전송 검증 실패: {}", e),
    }
}

impl SmtpMailer {
    fn build_message(&self, mail: &OutgoingMail) -> AppResult<(Message, String)> {
        let from = Mailbox::new(
            Some(self.sender.from_name.clone()),
            parse_address(&self.sender.from_email)?,
        );
        let to = Mailbox::new(None, parse_address(&mail.to)?);
        let message_id = generate_message_id(&self.sender.from_email);

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .message_id(Some(message_id.clone()));

        if let Some(reply_to) = &self.sender.reply_to {
            builder = builder.reply_to(Mailbox::new(None, parse_address(reply_to)?));
        }

        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                mail.text.clone(),
                mail.html.clone(),
            ))
            .context("메일 메시지 생성 실패")?;

        Ok((message, message_id))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_mail(&self, mail: &OutgoingMail) -> AppResult<SentMail> {
        let (message, message_id) = self.build_message(mail)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| AppError::DeliveryError(e.to_string()))?;

        let response_text = response
            .message()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let preview_url = self
            .preview_base
            .as_deref()
            .and_then(|base| test_account::preview_url(base, &response_text));

        Ok(SentMail {
            message_id,
            preview_url,
        })
    }

    async fn verify(&self) -> AppResult<()> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::DeliveryError(
                "SMTP 서버가 연결 확인에 응답하지 않았습니다".to_string(),
            )),
            Err(e) => Err(AppError::DeliveryError(e.to_string())),
        }
    }

    fn mode(&self) -> MailerMode {
        self.mode
    }
}

fn parse_address(raw: &str) -> AppResult<Address> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| AppError::DeliveryError(format!("{}: {}", e, raw)))
}

/// `<uuid@domain>` 형식의 Message-ID를 만듭니다.
fn generate_message_id(from_email: &str) -> String {
    let domain = from_email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim())
        .filter(|domain| !domain.is_empty())
        .unwrap_or("blood-donor-finder.local");

    format!("<{}@{}>", Uuid::new_v4(), domain)
}
