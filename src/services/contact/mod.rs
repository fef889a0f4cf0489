//! 연락 요청 서비스 모듈

pub mod contact_service;

pub use contact_service::ContactService;
