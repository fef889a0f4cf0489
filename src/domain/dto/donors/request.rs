//! 헌혈자 요청 DTO
//!
//! 등록 폼은 어떤 값이든 그대로 받아들이고, 연락 요청 폼만 필수 필드의 존재 여부를 검증합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::donors::NewDonor;

/// 헌혈자 등록 폼
///
/// 누락된 필드는 빈 문자열로 받아들이며 형식 검증이나 이메일 중복 확인은 하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterDonorForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub location: String,
}

impl From<RegisterDonorForm> for NewDonor {
    fn from(form: RegisterDonorForm) -> Self {
        NewDonor {
            name: form.name,
            email: form.email,
            phone: form.phone,
            blood_group: form.blood_group,
            location: form.location,
        }
    }
}

/// 헌혈자 검색 쿼리
///
/// `sent`/`error`는 직전 연락 요청의 결과를 페이지 배너로 표시할 때 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindDonorsQuery {
    pub blood_group: Option<String>,
    pub location: Option<String>,
    pub sent: Option<String>,
    pub error: Option<String>,
}

impl FindDonorsQuery {
    /// 혈액형과 지역이 모두 비어 있지 않을 때만 검색 조건을 반환합니다.
    ///
    /// 하나라도 없으면 `None`이며, 이때 페이지는 검색 전(빈 상태) 화면을 보여줍니다.
    pub fn criteria(&self) -> Option<(&str, &str)> {
        match (self.blood_group.as_deref(), self.location.as_deref()) {
            (Some(group), Some(location)) if !group.is_empty() && !location.is_empty() => {
                Some((group, location))
            }
            _ => None,
        }
    }
}

/// 연락 요청 폼
///
/// 세 필드 모두 존재하고 비어 있지 않아야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactRequestForm {
    #[validate(required, length(min = 1))]
    pub donor_id: Option<String>,
    #[validate(required, length(min = 1))]
    pub needer_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub needer_phone: Option<String>,
}

/// 검증을 통과한 연락 요청
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub donor_id: String,
    pub needer_name: String,
    pub needer_phone: String,
}

impl ContactRequestForm {
    /// 필수 필드를 검증하고 [`ContactRequest`]로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드가 없거나 빈 문자열인 경우
    pub fn into_request(self) -> AppResult<ContactRequest> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        match (self.donor_id, self.needer_name, self.needer_phone) {
            (Some(donor_id), Some(needer_name), Some(needer_phone)) => Ok(ContactRequest {
                donor_id,
                needer_name,
                needer_phone,
            }),
            _ => Err(AppError::ValidationError("필수 파라미터가 누락되었습니다".to_string())),
        }
    }
}
