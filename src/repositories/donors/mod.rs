//! 헌혈자 데이터 액세스 모듈

pub mod donor_repo;

pub use donor_repo::{DonorRepository, MySqlDonorRepository};
