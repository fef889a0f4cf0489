//! 연락 요청 알림 메일 작성 모듈
//!
//! 외부 상태에 의존하지 않는 순수 함수만 제공합니다.

pub mod composer;

pub use composer::{compose_notification, EmailContent, NotificationDetails};
