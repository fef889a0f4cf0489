//! # 헌혈자 리포지토리 구현
//!
//! `donors` 테이블에 대한 INSERT/SELECT를 담당합니다.
//! 모든 쿼리는 `?` 위치 플레이스홀더로 파라미터화됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use crate::core::errors::AppResult;
use crate::db::{Database, SqlParam};
use crate::domain::entities::donors::{Donor, NewDonor};

/// 헌혈자 저장소 추상화
///
/// 핸들러와 서비스는 이 trait을 통해서만 저장소에 접근하므로,
/// 테스트에서는 메모리 구현으로 교체할 수 있습니다.
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// 헌혈자를 저장하고 부여된 식별자를 반환합니다.
    async fn create(&self, donor: NewDonor) -> AppResult<i64>;

    /// 혈액형 완전 일치 + 지역 부분 일치로 검색합니다.
    ///
    /// 지역 비교의 대소문자 구분 여부는 컬럼 collation을 따릅니다.
    async fn search(&self, blood_group: &str, location: &str) -> AppResult<Vec<Donor>>;

    /// 식별자로 헌혈자 한 명을 조회합니다.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Donor>>;
}

const INSERT_DONOR: &str =
    "INSERT INTO donors (name, email, phone, blood_group, location) VALUES (?, ?, ?, ?, ?)";

const SEARCH_DONORS: &str = "SELECT id, name, email, phone, blood_group, location \
     FROM donors WHERE blood_group = ? AND location LIKE ?";

const FIND_DONOR_BY_ID: &str = "SELECT id, name, email, phone, blood_group, location \
     FROM donors WHERE id = ? LIMIT 1";

/// MySQL 기반 헌혈자 리포지토리
pub struct MySqlDonorRepository {
    db: Arc<Database>,
}

impl MySqlDonorRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DonorRepository for MySqlDonorRepository {
    async fn create(&self, donor: NewDonor) -> AppResult<i64> {
        let ack = self
            .db
            .execute(
                INSERT_DONOR,
                &[
                    SqlParam::Text(&donor.name),
                    SqlParam::Text(&donor.email),
                    SqlParam::Text(&donor.phone),
                    SqlParam::Text(&donor.blood_group),
                    SqlParam::Text(&donor.location),
                ],
            )
            .await?;

        debug!("헌혈자 저장 완료 - id: {}", ack.last_insert_id);

        Ok(ack.last_insert_id as i64)
    }

    async fn search(&self, blood_group: &str, location: &str) -> AppResult<Vec<Donor>> {
        let pattern = like_contains(location);

        self.db
            .fetch_all::<Donor>(
                SEARCH_DONORS,
                &[SqlParam::Text(blood_group), SqlParam::Text(&pattern)],
            )
            .await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Donor>> {
        let mut rows = self
            .db
            .fetch_all::<Donor>(FIND_DONOR_BY_ID, &[SqlParam::Int(id)])
            .await?;

        Ok(rows.pop())
    }
}

/// `LIKE`용 부분 일치 패턴을 만듭니다.
///
/// 입력에 포함된 `%`와 `_`는 와일드카드로 그대로 동작합니다.
fn like_contains(fragment: &str) -> String {
    format!("%{}%", fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_contains_wraps_fragment() {
        assert_eq!(like_contains("Mapo"), "%Mapo%");
        assert_eq!(like_contains(""), "%%");
    }

    /// `DATABASE_URL`이 가리키는 MySQL이 필요합니다.
    ///
    /// ```bash
    /// DATABASE_URL=mysql://root@localhost:3306/blood_donor_db cargo test -- --ignored
    /// ```
    #[actix_web::test]
    #[ignore]
    async fn test_mysql_round_trip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        let db = Arc::new(Database::connect(&url).await.unwrap());
        db.execute(
            "CREATE TABLE IF NOT EXISTS donors (\
             id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY, name VARCHAR(255) NOT NULL, \
             email VARCHAR(255) NOT NULL, phone VARCHAR(64) NOT NULL, \
             blood_group VARCHAR(8) NOT NULL, location VARCHAR(255) NOT NULL)",
            &[],
        )
        .await
        .unwrap();
        let repo = MySqlDonorRepository::new(db);

        let marker = uuid::Uuid::new_v4().simple().to_string();
        let location = format!("Suwon {}", marker);
        let id = repo
            .create(NewDonor {
                name: "Taeyang".into(),
                email: "taeyang@example.com".into(),
                phone: "010-7777-8888".into(),
                blood_group: "AB-".into(),
                location: location.clone(),
            })
            .await
            .unwrap();

        let found = repo.find_by_id(id).await.unwrap().expect("inserted donor");
        assert_eq!(found.name, "Taeyang");
        assert_eq!(found.email, "taeyang@example.com");
        assert_eq!(found.phone, "010-7777-8888");
        assert_eq!(found.blood_group, "AB-");
        assert_eq!(found.location, location);

        let hits = repo.search("AB-", &marker).await.unwrap();
        assert_eq!(hits, vec![found]);
        assert!(repo.search("AB+", &marker).await.unwrap().is_empty());
        assert_eq!(repo.find_by_id(-1).await.unwrap(), None);
    }

    #[test]
    fn test_statements_use_positional_placeholders() {
        assert_eq!(INSERT_DONOR.matches('?').count(), 5);
        assert_eq!(SEARCH_DONORS.matches('?').count(), 2);
        assert_eq!(FIND_DONOR_BY_ID.matches('?').count(), 1);
    }
}
