//! # Data Transfer Objects
//!
//! HTML 폼(`application/x-www-form-urlencoded`)과 쿼리 문자열로 들어오는
//! 요청 데이터 구조를 정의합니다.

pub mod donors;
