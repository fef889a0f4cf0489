//! # Domain Entities Module
//!
//! `donors` 테이블과 1:1로 대응하는 엔티티를 정의합니다.
//! 헌혈자는 등록 시 한 번 생성되고 이후 수정/삭제되지 않습니다.

pub mod donors;
