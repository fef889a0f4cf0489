//! # Domain Layer Module
//!
//! 헌혈자 도메인의 엔티티와 요청 DTO를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - Donor, NewDonor, BloodGroup
//! └── dto       - HTML 폼/쿼리 문자열 요청 구조체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Mail)
//! ```
//!
//! 연락 요청(헌혈 요청자 → 헌혈자)은 영속화되지 않으므로 엔티티가 없고,
//! [`dto::donors::ContactRequest`]로만 존재합니다.

pub mod entities;
pub mod dto;

pub use entities::donors::{BloodGroup, Donor, NewDonor};
pub use dto::donors::{ContactRequest, ContactRequestForm, FindDonorsQuery, RegisterDonorForm};
