//! Ethereal 테스트 메일 계정
//!
//! SMTP 자격 증명이 없는 개발 환경에서 일회용 계정을 발급받습니다.
//! Ethereal로 보낸 메일은 실제 수신자에게 전달되지 않고 웹에서 미리보기만 가능합니다.

use log::info;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// 계정 발급 API
pub const ACCOUNT_API_URL: &str = "https://api.nodemailer.com/user";

/// 메시지 미리보기 기본 URL
pub const PREVIEW_BASE_URL: &str = "https://ethereal.email";

#[derive(Debug, Serialize)]
struct AccountRequest<'a> {
    requestor: &'a str,
    version: &'a str,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    pass: Option<String>,
    #[serde(default)]
    smtp: Option<EndpointInfo>,
    #[serde(default)]
    web: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct EndpointInfo {
    host: String,
    port: u16,
    secure: bool,
}

/// 발급된 테스트 계정
#[derive(Debug, Clone, PartialEq)]
pub struct TestAccount {
    pub user: String,
    pub pass: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub web_url: String,
}

/// 응답에 SMTP 정보가 없을 때 쓰는 기본 엔드포인트 (`smtp.ethereal.email:587`, STARTTLS)
fn default_endpoint() -> (String, u16, bool) {
    ("smtp.ethereal.email".to_string(), 587, false)
}

/// 새 테스트 계정을 발급받습니다.
///
/// # Errors
///
/// * `AppError::ExternalServiceError` - API 호출 실패, 비정상 응답, 파싱 실패
pub async fn create_test_account() -> AppResult<TestAccount> {
    let client = reqwest::Client::new();

    let response = client
        .post(ACCOUNT_API_URL)
        .json(&AccountRequest {
            requestor: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        })
        .send()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("테스트 계정 요청 실패: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::ExternalServiceError(format!(
            "테스트 계정 API 응답 오류: {}",
            response.status()
        )));
    }

    let body = response
        .json::<AccountResponse>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("테스트 계정 응답 파싱 실패: {}", e)))?;

    let account = account_from_response(body)?;
    info!("Ethereal 테스트 계정 발급됨: {}", account.user);
    Ok(account)
}

fn account_from_response(body: AccountResponse) -> AppResult<TestAccount> {
    if body.status != "success" {
        return Err(AppError::ExternalServiceError(
            body.error
                .unwrap_or_else(|| format!("테스트 계정 발급 실패 (status: {})", body.status)),
        ));
    }

    let (user, pass) = match (body.user, body.pass) {
        (Some(user), Some(pass)) => (user, pass),
        _ => {
            return Err(AppError::ExternalServiceError(
                "테스트 계정 응답에 자격 증명이 없습니다".to_string(),
            ));
        }
    };

    let (smtp_host, smtp_port, smtp_secure) = match body.smtp {
        Some(endpoint) => (endpoint.host, endpoint.port, endpoint.secure),
        None => default_endpoint(),
    };

    Ok(TestAccount {
        user,
        pass,
        smtp_host,
        smtp_port,
        smtp_secure,
        web_url: body.web.unwrap_or_else(|| PREVIEW_BASE_URL.to_string()),
    })
}

/// SMTP 응답 문자열에서 미리보기 링크를 만듭니다.
///
/// Ethereal은 `250 Accepted [STATUS=new MSGID=<id>]` 형식으로 응답합니다.
pub fn preview_url(web_url: &str, smtp_response: &str) -> Option<String> {
    let start = smtp_response.find("MSGID=")? + "MSGID=".len();
    let msg_id: String = smtp_response[start..]
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != ']')
        .collect();

    if msg_id.is_empty() {
        return None;
    }

    Some(format!("{}/message/{}", web_url.trim_end_matches('/'), msg_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_from_success_response() {
        let body: AccountResponse = serde_json::from_str(
            r#"{
                "status": "success",
                "user": "amy.larson@ethereal.email",
                "pass": "s3cr3t",
                "smtp": { "host": "smtp.ethereal.email", "port": 587, "secure": false },
                "imap": { "host": "imap.ethereal.email", "port": 993, "secure": true },
                "web": "https://ethereal.email"
            }"#,
        )
        .unwrap();

        let account = account_from_response(body).unwrap();

        assert_eq!(account.user, "amy.larson@ethereal.email");
        assert_eq!(account.smtp_host, "smtp.ethereal.email");
        assert_eq!(account.smtp_port, 587);
        assert!(!account.smtp_secure);
    }

    #[test]
    fn test_account_from_error_response() {
        let body: AccountResponse =
            serde_json::from_str(r#"{"status": "error", "error": "Too many requests"}"#).unwrap();

        match account_from_response(body) {
            Err(AppError::ExternalServiceError(msg)) => assert_eq!(msg, "Too many requests"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_preview_url_from_smtp_response() {
        assert_eq!(
            preview_url(
                "https://ethereal.email/",
                "250 Accepted [STATUS=new MSGID=ZGVtby1tZXNzYWdl]"
            ),
            Some("https://ethereal.email/message/ZGVtby1tZXNzYWdl".to_string())
        );
        assert_eq!(preview_url(PREVIEW_BASE_URL, "250 2.0.0 OK queued"), None);
        assert_eq!(preview_url(PREVIEW_BASE_URL, "250 Accepted [MSGID=]"), None);
    }
}
