//! # 알림 메일 작성기
//!
//! 헌혈자 정보와 요청자 정보를 받아 제목, 텍스트 본문, HTML 본문을 만듭니다.
//! HTML 본문에 들어가는 모든 값은 [`escape_html`]로 이스케이프되고,
//! 텍스트 본문에는 입력값이 그대로 들어갑니다.

use crate::utils::string_utils::{escape_html, or_placeholder};

/// 혈액형/지역이 비어 있을 때 표시할 값
const NOT_AVAILABLE: &str = "N/A";

/// 메일 작성에 필요한 값
#[derive(Debug, Clone, Copy)]
pub struct NotificationDetails<'a> {
    pub donor_name: &'a str,
    pub needer_name: &'a str,
    pub needer_phone: &'a str,
    pub blood_group: &'a str,
    pub location: &'a str,
}

/// 작성된 메일 내용
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// 연락 요청 메일을 작성합니다.
///
/// ```rust,ignore
/// let content = compose_notification(&NotificationDetails {
///     donor_name: "Minho",
///     needer_name: "Jisoo",
///     needer_phone: "010-0000-1111",
///     blood_group: "O+",
///     location: "Seoul",
/// });
/// assert!(content.subject.contains("(O+)"));
/// ```
pub fn compose_notification(details: &NotificationDetails<'_>) -> EmailContent {
    let blood_group = or_placeholder(details.blood_group, NOT_AVAILABLE);
    let location = or_placeholder(details.location, NOT_AVAILABLE);

    let subject = format!(
        "Request for blood donation ({}) — {}",
        blood_group, details.needer_name
    );

    let text = format!(
        "Hello {donor},\n\
         \n\
         A person near {location} requires blood type {group}.\n\
         \n\
         Name: {name}\n\
         Phone: {phone}\n\
         \n\
         Please contact them directly if you can help.\n\
         \n\
         — Blood Donor Finder\n",
        donor = details.donor_name,
        location = location,
        group = blood_group,
        name = details.needer_name,
        phone = details.needer_phone,
    );

    let html = format!(
        r#"
  <div style="font-family:Arial,Helvetica,sans-serif;line-height:1.4;color:#222;">
    <p>Hello <strong>{donor}</strong>,</p>
    <p><strong>A person needs blood type {group} in/near {location}.</strong></p>
    <p>
      <strong>Name:</strong> {name}<br/>
      <strong>Phone:</strong> {phone}
    </p>
    <p>Please contact them directly if you can help. Thank you.</p>
    <p style="font-size:0.9em;color:#666">Blood Donor Finder</p>
  </div>
  "#,
        donor = escape_html(details.donor_name),
        group = escape_html(blood_group),
        location = escape_html(location),
        name = escape_html(details.needer_name),
        phone = escape_html(details.needer_phone),
    );

    EmailContent { subject, text, html }
}
