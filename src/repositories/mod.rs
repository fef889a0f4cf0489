//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`donors::DonorRepository`] trait에만 의존하고,
//! 실제 구현([`donors::MySqlDonorRepository`])은 main에서 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blood_donor_finder::repositories::donors::{DonorRepository, MySqlDonorRepository};
//!
//! let repo: Arc<dyn DonorRepository> = Arc::new(MySqlDonorRepository::new(database));
//! let donors = repo.search("O+", "Seoul").await?;
//! ```

pub mod donors;
