//! 헌혈자 검색 페이지
//!
//! 검색 전 상태(`donors == None`)와 결과 0건(`Some(&[])`)을 다른 문구로 보여줍니다.

use crate::domain::entities::donors::{BloodGroup, Donor};
use crate::utils::string_utils::escape_html;
use super::layout;

/// 검색 페이지 렌더링 입력
#[derive(Debug, Clone, Copy, Default)]
pub struct FindPage<'a> {
    pub blood_group: Option<&'a str>,
    pub location: Option<&'a str>,
    /// `None`이면 검색을 실행하지 않은 상태
    pub donors: Option<&'a [Donor]>,
    /// 직전 연락 요청 결과 (`"1"` 또는 `"0"`)
    pub sent: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// `GET /find` 페이지를 렌더링합니다.
pub fn render_find_page(page: &FindPage<'_>) -> String {
    let mut body = String::new();

    body.push_str(&render_banner(page.sent, page.error));
    body.push_str(&render_search_form(page.blood_group, page.location));

    match page.donors {
        None => body.push_str(
            r#"  <p class="empty">Choose a blood group and enter a location to search for donors.</p>"#,
        ),
        Some([]) => body.push_str(r#"  <p class="empty">No donors found.</p>"#),
        Some(donors) => {
            for donor in donors {
                body.push_str(&render_donor(donor));
            }
        }
    }

    layout("Find blood donors", &body)
}

fn render_banner(sent: Option<&str>, error: Option<&str>) -> String {
    match sent {
        Some("1") => {
            r#"  <div class="banner ok">Your request was sent to the donor.</div>
"#
            .to_string()
        }
        Some("0") => format!(
            r#"  <div class="banner fail">Could not send your request: {}</div>
"#,
            escape_html(error.unwrap_or("unexpected"))
        ),
        _ => String::new(),
    }
}

fn render_search_form(blood_group: Option<&str>, location: Option<&str>) -> String {
    let options: String = BloodGroup::ALL
        .iter()
        .map(|group| {
            let selected = if blood_group == Some(group.as_str()) { " selected" } else { "" };
            format!(
                r#"      <option value="{0}"{1}>{0}</option>"#,
                group.as_str(),
                selected
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"  <form method="get" action="/find">
    <label>Blood group
      <select name="blood_group">
        <option value="">--</option>
{options}
      </select>
    </label>
    <label>Location <input type="text" name="location" value="{location}"/></label>
    <button type="submit">Search</button>
  </form>
"#,
        options = options,
        location = escape_html(location.unwrap_or_default()),
    )
}

fn render_donor(donor: &Donor) -> String {
    // 알 수 없는 값은 저장된 원문 그대로
    let group = donor
        .parsed_blood_group()
        .map(|group| group.to_string())
        .unwrap_or_else(|| donor.blood_group.clone());

    format!(
        r#"  <div class="donor">
    <strong>{name}</strong> ({group}), {location}
    <form method="post" action="/request">
      <input type="hidden" name="donor_id" value="{id}"/>
      <label>Your name <input type="text" name="needer_name"/></label>
      <label>Your phone <input type="tel" name="needer_phone"/></label>
      <button type="submit">Request contact</button>
    </form>
  </div>
"#,
        name = escape_html(&donor.name),
        group = escape_html(&group),
        location = escape_html(&donor.location),
        id = donor.id,
    )
}
