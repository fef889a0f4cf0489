//! 애플리케이션 핵심 모듈
//!
//! 계층 전체에서 공유하는 에러 타입을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blood_donor_finder::core::errors::{AppError, AppResult};
//!
//! fn find(id: i64) -> AppResult<Donor> {
//!     Err(AppError::NotFound(format!("donor {}", id)))
//! }
//! ```

pub mod errors;
