//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성 시점에 리포지토리와 메일 전송 계층을 주입받습니다.
//! 전역 싱글톤은 없으며, main에서 한 번 만들어 `web::Data`로 공유합니다.
//!
//! # Modules
//!
//! - [`donors`] - 헌혈자 등록 및 검색
//! - [`notifications`] - 연락 요청 메일 본문 작성 (순수 함수)
//! - [`mail`] - 메일 전송 trait, SMTP 구현, Ethereal 테스트 계정
//! - [`contact`] - 연락 요청 흐름 (조회 → 작성 → 전송)
//!
//! # Examples
//!
//! ```rust,ignore
//! let donor_service = DonorService::new(donor_repo.clone());
//! let contact_service = ContactService::new(donor_repo, mailer);
//! ```

pub mod donors;
pub mod notifications;
pub mod mail;
pub mod contact;
