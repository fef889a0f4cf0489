//! 헌혈자 등록/검색 서비스 모듈

pub mod donor_service;

pub use donor_service::DonorService;
