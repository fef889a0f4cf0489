//! 메일 전송 설정 모듈
//!
//! SMTP 접속 정보와 발신자 정보를 환경 변수에서 읽어옵니다.
//! `SMTP_HOST`, `SMTP_USER`, `SMTP_PASS`가 모두 있을 때만 실제 SMTP 설정이 만들어지고,
//! 하나라도 빠지면 [`MailConfig::smtp`]가 `None`이 되어 Ethereal 테스트 계정 모드로 동작합니다.

use std::env;
use std::time::Duration;

/// SMTP 기본 포트 (STARTTLS submission)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP 연결 타임아웃 기본값 (밀리초)
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;

/// 기본 발신자 표시 이름
pub const DEFAULT_FROM_NAME: &str = "Blood Donor Finder";

/// 기본 발신 주소
pub const DEFAULT_FROM_EMAIL: &str = "noreply@example.com";

/// 완전한 SMTP 접속 정보
#[derive(Debug, Clone, PartialEq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// `true`면 접속 즉시 TLS (보통 465), `false`면 STARTTLS 업그레이드
    pub secure: bool,
    pub user: String,
    pub pass: String,
}

/// 발신 메시지에 공통으로 붙는 발신자 정보
#[derive(Debug, Clone, PartialEq)]
pub struct SenderIdentity {
    pub from_name: String,
    pub from_email: String,
    pub reply_to: Option<String>,
}

/// 메일러 초기화에 필요한 전체 설정
#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    /// 자격 증명이 모두 있을 때만 `Some`
    pub smtp: Option<SmtpSettings>,
    /// 서버 인증서 검증 여부 (`SMTP_TLS_REJECT=false`일 때만 비활성화)
    pub tls_reject_unauthorized: bool,
    pub connection_timeout: Duration,
    pub sender: SenderIdentity,
}

impl MailConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수를 통해 설정을 읽습니다.
    ///
    /// 빈 문자열은 값이 없는 것으로 취급합니다.
    ///
    /// ```rust,ignore
    /// let vars: HashMap<&str, &str> = HashMap::from([("SMTP_HOST", "smtp.example.com")]);
    /// let config = MailConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let smtp_user = get("SMTP_USER");

        let smtp = match (get("SMTP_HOST"), smtp_user.clone(), get("SMTP_PASS")) {
            (Some(host), Some(user), Some(pass)) => Some(SmtpSettings {
                host,
                port: parse_or(get("SMTP_PORT"), "SMTP_PORT", DEFAULT_SMTP_PORT),
                secure: get("SMTP_SECURE").as_deref() == Some("true"),
                user,
                pass,
            }),
            _ => None,
        };

        let from_email = get("FROM_EMAIL");
        let reply_to = get("REPLY_TO")
            .or_else(|| from_email.clone())
            .or_else(|| smtp_user.clone());

        let sender = SenderIdentity {
            from_name: get("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            from_email: from_email
                .or(smtp_user)
                .unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            reply_to,
        };

        let timeout_ms = parse_or(
            get("SMTP_CONN_TIMEOUT"),
            "SMTP_CONN_TIMEOUT",
            DEFAULT_CONNECTION_TIMEOUT_MS,
        );

        Self {
            smtp,
            tls_reject_unauthorized: get("SMTP_TLS_REJECT").as_deref() != Some("false"),
            connection_timeout: Duration::from_millis(timeout_ms),
            sender,
        }
    }

    /// 실제 SMTP 자격 증명이 설정되어 있는지 여부
    pub fn has_credentials(&self) -> bool {
        self.smtp.is_some()
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}
