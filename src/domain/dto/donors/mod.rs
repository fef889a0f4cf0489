//! # 헌혈자 관련 요청 DTO 모듈
//!
//! - [`RegisterDonorForm`] - `POST /register` 폼 (검증 없음)
//! - [`FindDonorsQuery`] - `GET /find` 쿼리 문자열
//! - [`ContactRequestForm`] - `POST /request` 폼 (필수 필드 존재 여부만 검증)

pub mod request;

pub use request::{ContactRequest, ContactRequestForm, FindDonorsQuery, RegisterDonorForm};
