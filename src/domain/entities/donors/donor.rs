//! Donor Entity Implementation
//!
//! 헌혈자 엔티티의 핵심 구현체입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use super::blood_group::BloodGroup;

/// 등록된 헌혈자
///
/// `id`는 저장소가 부여하며 이후 변경되지 않습니다.
/// 나머지 필드는 등록 폼에 입력된 값이 검증 없이 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Donor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// 등록 시 입력된 원문 (`A+`, `O-` 등)
    pub blood_group: String,
    pub location: String,
}

impl Donor {
    /// 저장된 혈액형을 열거형으로 해석합니다.
    ///
    /// 등록 시 검증하지 않으므로 알 수 없는 값이면 `None`입니다.
    pub fn parsed_blood_group(&self) -> Option<BloodGroup> {
        self.blood_group.parse().ok()
    }
}

/// 아직 식별자가 부여되지 않은 헌혈자 (INSERT 입력)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewDonor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_group: String,
    pub location: String,
}

impl NewDonor {
    /// 저장소가 부여한 식별자와 결합하여 [`Donor`]를 만듭니다.
    pub fn with_id(self, id: i64) -> Donor {
        Donor {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            blood_group: self.blood_group,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_keeps_fields() {
        let donor = NewDonor {
            name: "Mina".to_string(),
            email: "mina@example.com".to_string(),
            phone: "010-1234-5678".to_string(),
            blood_group: "AB-".to_string(),
            location: "Seoul Mapo".to_string(),
        }
        .with_id(42);

        assert_eq!(donor.id, 42);
        assert_eq!(donor.email, "mina@example.com");
        assert_eq!(donor.parsed_blood_group(), Some(BloodGroup::AbNegative));
    }

    #[test]
    fn test_unknown_blood_group_is_kept_verbatim() {
        let donor = NewDonor {
            blood_group: "C+".to_string(),
            ..NewDonor::default()
        }
        .with_id(1);

        assert_eq!(donor.blood_group, "C+");
        assert_eq!(donor.parsed_blood_group(), None);
    }
}
