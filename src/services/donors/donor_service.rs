//! # 헌혈자 서비스 구현
//!
//! 등록 폼을 그대로 저장하고, 혈액형/지역 조건으로 검색합니다.
//! 입력 검증, 중복 확인, 정렬, 페이지네이션은 하지 않습니다.

use std::sync::Arc;
use log::{error, info};
use crate::core::errors::AppResult;
use crate::domain::dto::donors::{FindDonorsQuery, RegisterDonorForm};
use crate::domain::entities::donors::Donor;
use crate::repositories::donors::DonorRepository;

/// 헌혈자 등록 및 검색 비즈니스 로직
pub struct DonorService {
    donor_repo: Arc<dyn DonorRepository>,
}

impl DonorService {
    pub fn new(donor_repo: Arc<dyn DonorRepository>) -> Self {
        Self { donor_repo }
    }

    /// 헌혈자를 등록하고 부여된 식별자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - INSERT 실패
    pub async fn register(&self, form: RegisterDonorForm) -> AppResult<i64> {
        let id = self.donor_repo.create(form.into()).await.map_err(|e| {
            error!("DB insert error: {}", e);
            e
        })?;

        info!("헌혈자 등록 완료 - id: {}", id);
        Ok(id)
    }

    /// 검색 조건이 모두 있을 때만 검색합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - 혈액형 또는 지역이 비어 있음 (검색 전 상태)
    /// * `Ok(Some(donors))` - 검색 결과 (0건일 수 있음)
    pub async fn search(&self, query: &FindDonorsQuery) -> AppResult<Option<Vec<Donor>>> {
        let Some((blood_group, location)) = query.criteria() else {
            return Ok(None);
        };

        let donors = self
            .donor_repo
            .search(blood_group, location)
            .await
            .map_err(|e| {
                error!("DB query error: {}", e);
                e
            })?;

        info!(
            "헌혈자 검색 - 혈액형: {}, 지역: {}, 결과: {}건",
            blood_group,
            location,
            donors.len()
        );
        Ok(Some(donors))
    }
}
