//! 헌혈자 등록 페이지

use crate::domain::entities::donors::BloodGroup;
use super::layout;

/// `GET /register` 페이지를 렌더링합니다.
pub fn render_register_page() -> String {
    let options: String = BloodGroup::ALL
        .iter()
        .map(|group| format!(r#"      <option value="{0}">{0}</option>"#, group.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"  <form method="post" action="/register">
    <label>Name <input type="text" name="name"/></label>
    <label>Email <input type="email" name="email"/></label>
    <label>Phone <input type="tel" name="phone"/></label>
    <label>Blood group
      <select name="blood_group">
{options}
      </select>
    </label>
    <label>Location <input type="text" name="location"/></label>
    <button type="submit">Register</button>
  </form>"#
    );

    layout("Register as a donor", &body)
}
